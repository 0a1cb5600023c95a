//! Init command implementation

use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};
use strictlen_core::LinterConfig;
use tracing::info;

const DEFAULT_CONFIG: &str = r#"{
  // MY000 / stricter-line-length
  "options": {
    "stricter-line-length": {
      "severity": "error",
      "line_length": 120,
      "ignore_code_blocks": true,
      "ignore_tables": true,
      "ignore_links": true,
      "ignore_link_punctuation": true
    }
  },
  "include": [],
  "exclude": ["node_modules/**"]
}
"#;

pub fn run_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(LinterConfig::CONFIG_FILES[0]);

    loop {
        let mut options = std::fs::OpenOptions::new();
        options.write(true).create_new(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.custom_flags(libc::O_NOFOLLOW);
        }

        match options.open(&config_path) {
            Ok(mut file) => {
                use std::io::Write;
                file.write_all(DEFAULT_CONFIG.as_bytes()).into_diagnostic()?;
                info!("Created {}", config_path.display());
                return Ok(());
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                if !force {
                    return Err(miette::miette!(
                        "Config file already exists. Use --force to overwrite."
                    ));
                }

                match std::fs::remove_file(&config_path) {
                    Ok(()) => {}
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                    Err(e) => return Err(e).into_diagnostic(),
                }
            }
            Err(e) => return Err(e).into_diagnostic(),
        }
    }
}
