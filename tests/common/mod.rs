//! Stub collaborators for the pipeline tests.
#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use blant_epp::LauncherConfig;

/// Timing stand-in: `[-v] -o REPORT CMD...` runs CMD, writes REPORT, keeps CMD's status.
pub const TIME_STUB: &str = r#"#!/bin/sh
while [ "$1" = "-v" ]; do shift; done
[ "$1" = "-o" ] || exit 97
report="$2"
shift 2
"$@"
status=$?
echo "stub report: $1 exited $status" > "$report"
exit $status
"#;

fn write_script(path: &Path, body: &str) -> PathBuf {
    fs::write(path, body).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    path.to_path_buf()
}

/// Records its arguments in `blant_calls.log` (cwd) and prints two sample lines.
pub fn write_blant(dir: &Path, status: i32) -> PathBuf {
    let body = format!(
        "#!/bin/sh\nprintf '%s|' \"$@\" >> blant_calls.log\necho >> blant_calls.log\n\
         printf '0 1 5\\n1 2 7\\n'\nexit {status}\n"
    );
    write_script(&dir.join(format!("blant-{status}")), &body)
}

/// Copies stdin and its arguments into the directory passed with `-o`.
pub fn write_epp(dir: &Path, status: i32) -> PathBuf {
    let body = format!(
        "#!/bin/sh\nout=\"$6\"\ncat > \"$out/epp_input.txt\"\n\
         printf '%s|' \"$@\" > \"$out/epp_args.txt\"\nexit {status}\n"
    );
    write_script(&dir.join(format!("epp-{status}")), &body)
}

pub fn write_time(dir: &Path) -> PathBuf {
    write_script(&dir.join("time"), TIME_STUB)
}

/// Config pointing at stubs in `<work_dir>/bin`. The timing stub is run
/// through `/bin/sh` so the test process never execs a file it just wrote.
pub fn stub_config(work_dir: &Path, blant_status: i32, epp_status: i32) -> LauncherConfig {
    let bin = work_dir.join("bin");
    fs::create_dir_all(&bin).unwrap();
    let time = bin.join("time.sh");
    fs::write(&time, TIME_STUB).unwrap();

    LauncherConfig {
        blant: write_blant(&bin, blant_status),
        epp: write_epp(&bin, epp_status),
        time: PathBuf::from("/bin/sh"),
        time_args: vec![time.to_string_lossy().into_owned()],
        input_graph: PathBuf::from("graph.el"),
        work_dir: work_dir.to_path_buf(),
        ..Default::default()
    }
}
