//! Fake `composer`, `php` and license decoder scripts for end-to-end runs.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// License key the fake decoder accepts.
pub(crate) const VALID_KEY: &str = "VALID-KEY";

pub(crate) struct FakeToolchain {
    pub bin_dir: PathBuf,
    /// Every composer/php invocation, one line each.
    pub log_file: PathBuf,
    /// License file paths the decoder was handed.
    pub license_log: PathBuf,
}

impl FakeToolchain {
    pub(crate) fn install(root: &Path) -> Self {
        let bin_dir = root.join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        let log_file = root.join("commands.log");
        let license_log = root.join("license.log");

        write_script(
            &bin_dir.join("composer"),
            &format!(
                r#"#!/bin/sh
echo "composer $*" >> "{log}"
case "$1" in
    create-project)
        for target in "$@"; do :; done
        mkdir -p "$target"
        cat > "$target/composer.json" <<'JSON'
{{
    "name": "ahead4-platform/base",
    "require": {{
        "php": ">=7.1"
    }}
}}
JSON
        printf 'APP_ENV=local\nDB_DATABASE=platform\n' > "$target/.env"
        echo "Installing ahead4-platform/base (dev-master)"
        ;;
    update)
        if [ -n "$FAKE_COMPOSER_FAIL" ]; then
            echo "Your requirements could not be resolved" >&2
            exit 3
        fi
        echo "Updating dependencies"
        ;;
esac
exit 0
"#,
                log = log_file.display()
            ),
        );

        write_script(
            &bin_dir.join("php"),
            &format!(
                "#!/bin/sh\necho \"php $*\" >> \"{log}\"\nexit 0\n",
                log = log_file.display()
            ),
        );

        write_script(
            &bin_dir.join("platform-license"),
            &format!(
                r#"#!/bin/sh
echo "$1" >> "{log}"
if [ "$(cat "$1")" = "{key}" ]; then
    echo '{{"valid": true, "features": ["billing", "reporting"]}}'
else
    echo "signature mismatch" >&2
    exit 1
fi
"#,
                log = license_log.display(),
                key = VALID_KEY
            ),
        );

        Self { bin_dir, log_file, license_log }
    }

    /// Installer config pointing every external program at the fakes.
    pub(crate) fn config(&self, extra: &str) -> String {
        format!(
            r#"[package_manager]
program = "{bin}/composer"

[license]
program = "{bin}/platform-license"
args = []

[migrations]
php = "{bin}/php"

{extra}
"#,
            bin = self.bin_dir.display(),
            extra = extra
        )
    }

    pub(crate) fn commands(&self) -> Vec<String> {
        fs::read_to_string(&self.log_file)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub(crate) fn license_files(&self) -> Vec<PathBuf> {
        fs::read_to_string(&self.license_log)
            .unwrap_or_default()
            .lines()
            .map(PathBuf::from)
            .collect()
    }
}

fn write_script(path: &Path, content: &str) {
    fs::write(path, content).expect("Failed to write fake script");
    let mut perms = fs::metadata(path).expect("Failed to get metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to set permissions");
}
