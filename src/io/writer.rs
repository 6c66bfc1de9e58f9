use std::{
    ffi::OsString,
    fs::File,
    io::{
        BufWriter,
        Write,
    },
    path::{
        Path,
        PathBuf,
    },
};

use tracing::debug;

use crate::error::Result;


pub const SPLATV_EXTENSION: &str = "splatv";


/// `<input>.splatv`, keeping the input's own extension.
pub fn splatv_path_for(input: &Path) -> PathBuf {
    let mut path = OsString::from(input.as_os_str());
    path.push(".");
    path.push(SPLATV_EXTENSION);
    path.into()
}

fn partial_path_for(path: &Path) -> PathBuf {
    let mut partial = OsString::from(path.as_os_str());
    partial.push(".partial");
    partial.into()
}

/// Writes `data` next to `path` and renames it into place, so `path` is
/// either left untouched or holds the complete stream.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display(), bytes = data.len()))]
pub fn write_splatv_file(data: &[u8], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let partial = partial_path_for(path);

    let written = write_all_synced(data, &partial)
        .and_then(|()| std::fs::rename(&partial, path));

    if let Err(err) = written {
        let _ = std::fs::remove_file(&partial);
        return Err(err.into());
    }

    debug!("wrote splatv file");
    Ok(())
}

fn write_all_synced(data: &[u8], path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(data)?;
    writer.into_inner().map_err(|err| err.into_error())?.sync_all()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_extension() {
        assert_eq!(
            splatv_path_for(Path::new("scenes/coffee.ply")),
            PathBuf::from("scenes/coffee.ply.splatv"),
        );
    }

    #[test]
    fn writes_and_replaces() {
        let dir = std::env::temp_dir().join(format!("splatv_writer_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.splatv");

        write_splatv_file(b"first", &path).unwrap();
        write_splatv_file(b"second", &path).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"second");
        assert!(!partial_path_for(&path).exists());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn failed_write_leaves_nothing() {
        let path = std::env::temp_dir()
            .join(format!("splatv_missing_dir_{}", std::process::id()))
            .join("out.splatv");

        assert!(write_splatv_file(b"data", &path).is_err());
        assert!(!path.exists());
        assert!(!partial_path_for(&path).exists());
    }
}
