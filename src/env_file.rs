use std::fs;
use std::io;
use std::path::Path;

/// The variable name the client application reads its publish key from.
pub const PUBLISH_KEY_VAR: &str = "VITE_PUBNUB_PUBLISH_KEY";

/// Likewise for the subscribe key.
pub const SUBSCRIBE_KEY_VAR: &str = "VITE_PUBNUB_SUBSCRIBE_KEY";

/// Writes the issued key pair to a `KEY=value` env file at the given path,
/// overwriting whatever is already there.
///
/// This file is the sole durable output of a provisioning run.
pub fn write_env_file(path: &Path, publish_key: &str, subscribe_key: &str) -> io::Result<()> {
    let contents = format!(
        "{PUBLISH_KEY_VAR}={publish_key}\n{SUBSCRIBE_KEY_VAR}={subscribe_key}\n"
    );
    fs::write(path, contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_exactly_two_lines() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let path = dir.path().join(".env");

        write_env_file(&path, "pub_abc", "sub_xyz").expect("env file write");

        let contents = fs::read_to_string(&path).expect("env file read");
        assert_eq!(
            contents,
            "VITE_PUBNUB_PUBLISH_KEY=pub_abc\nVITE_PUBNUB_SUBSCRIBE_KEY=sub_xyz\n"
        );
    }

    #[test]
    fn overwrites_existing_file_without_backup() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let path = dir.path().join(".env");
        fs::write(&path, "STALE=contents\n").expect("seed file");

        write_env_file(&path, "pub_new", "sub_new").expect("env file write");

        let contents = fs::read_to_string(&path).expect("env file read");
        assert_eq!(
            contents,
            "VITE_PUBNUB_PUBLISH_KEY=pub_new\nVITE_PUBNUB_SUBSCRIBE_KEY=sub_new\n"
        );
    }

    #[test]
    fn unwritable_path_surfaces_io_error() {
        let dir = tempfile::tempdir().expect("temporary directory");
        // A directory component that does not exist makes the write fail.
        let path = dir.path().join("missing").join(".env");

        assert!(write_env_file(&path, "pub_abc", "sub_xyz").is_err());
    }
}
