use std::fs;
use std::path::PathBuf;
use std::process;

pub struct TestFixtures;

impl TestFixtures {
    pub fn get_session() -> &'static str {
        "# saved by the session dialog\n\
HostName=example.com\n\
PortNumber=22\n\
UserName=\n\
Font=Courier New\n\
FontHeight=10\n\
TermWidth=80\n\
TermHeight=24\n\
Colour0=187,187,187\n"
    }

    pub fn get_xresources() -> &'static str {
        "! ~/.Xresources\n\
putty.Font: DejaVu Sans Mono\n\
putty.FontHeight: 12\n\
*Colour0: 0,0,0\n\
XTerm.vt100.faceName: ignored\n\
putty.ScrollbackLines: 5000\n"
    }

    pub fn get_malformed_session() -> &'static str {
        "HostName=example.com\nthis line has no separator\n"
    }

    /// Writes `contents` to a per-process temp file and returns its path.
    pub fn write_temp(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("confmap-tests-{}", process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }
}
