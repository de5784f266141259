#![doc = r#"
blant-epp — run BLANT graphlet sampling piped into epp edge prediction.

The launcher validates its parameters, creates a fresh output directory named
`k<k>-n<n>-e<e>-output`, and runs

```text
time -o OUT/total_time.txt sh -c '
    time -o OUT/blant_time.txt blant -k K -n N GRAPH |
    time -o OUT/epp_time.txt   epp   -k K -e E -o OUT'
```

BLANT, epp and the timing utility are external programs; their output is never
parsed here.

Quick start
-----------
```rust,no_run
use blant_epp::{launch, LaunchParams, LauncherConfig, StatusPolicy};

fn main() -> blant_epp::Result<()> {
    let config = LauncherConfig {
        status_policy: StatusPolicy::AnyStage,
        ..Default::default()
    };
    let params = LaunchParams::validate(Some("5".into()), Some("100".into()), None, &config)?;

    let outcome = launch(&params, &config)?;
    println!("{} -> {}", outcome.output_dir.display(), outcome.status);
    Ok(())
}
```

Useful modules
--------------
- [`api`] — `launch`, the whole validate/prepare/spawn sequence.
- [`core`] — parameters, output directory handling, pipeline construction.
- [`types`] — `StatusPolicy`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod types;

pub use api::launch;
pub use core::output::{
    BLANT_TIME_FILE, EPP_TIME_FILE, TOTAL_TIME_FILE, output_dir_name, output_path,
    prepare_output_dir,
};
pub use core::params::{DEFAULT_E, LaunchParams, LauncherConfig};
pub use core::pipeline::{PipelineOutcome, run_pipeline};
pub use error::{Error, Result};
pub use types::StatusPolicy;
