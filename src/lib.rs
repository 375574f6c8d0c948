//! Library crate root re-exporting the launcher modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod launch;

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    #[test]
    fn cli_layout_requires_split_modules() {
        let expected_files = [
            "src/cli/mod.rs",
            "src/cli/args.rs",
            "src/cli/parse.rs",
            "src/cli/profile.rs",
        ];

        for path in expected_files {
            assert!(Path::new(path).exists(), "CLI layout: {} must exist", path);
        }

        let mod_path = Path::new("src/cli/mod.rs");
        let content = fs::read_to_string(mod_path)
            .unwrap_or_else(|_| panic!("CLI layout: failed to read {}", mod_path.display()));

        for needle in ["LauncherArgs", "parse", "LaunchProfile"] {
            assert!(
                content.contains(needle),
                "CLI layout: mod.rs must re-export {}",
                needle
            );
        }
    }

    #[test]
    fn launch_layout_requires_split_modules() {
        let expected_files = [
            "src/launch/mod.rs",
            "src/launch/command.rs",
            "src/launch/bootstrap.rs",
        ];

        for path in expected_files {
            assert!(
                Path::new(path).exists(),
                "launch layout: {} must exist",
                path
            );
        }

        let mod_path = Path::new("src/launch/mod.rs");
        let content = fs::read_to_string(mod_path)
            .unwrap_or_else(|_| panic!("launch layout: failed to read {}", mod_path.display()));

        for needle in ["command", "bootstrap"] {
            assert!(
                content.contains(needle),
                "launch layout: mod.rs must re-export {}",
                needle
            );
        }
    }
}
