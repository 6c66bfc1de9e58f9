use serde::{
    Deserialize,
    Serialize,
};

use crate::error::{
    Result,
    SplatvError,
};


pub const SPLATV_MAGIC: u32 = 0x674b;
pub const SPLATV_TYPE: &str = "splat";

/// Texels per row of the renderer's splat texture.
pub const TEXTURE_WIDTH: usize = 1024 * 4;
pub const TEXELS_PER_SPLAT: usize = 4;
pub const BYTES_PER_TEXEL: usize = 16;


#[derive(
    Clone,
    Debug,
    PartialEq,
    Serialize,
    Deserialize,
)]
pub struct SplatvCamera {
    pub id: u32,
    pub img_name: String,
    pub width: u32,
    pub height: u32,
    pub position: [f64; 3],
    pub rotation: [[f64; 3]; 3],
    pub fy: f64,
    pub fx: f64,
}

impl Default for SplatvCamera {
    fn default() -> Self {
        Self {
            id: 0,
            img_name: "00001".to_string(),
            width: 1959,
            height: 1090,
            position: [
                -3.0089893469241797,
                -0.11086489695181866,
                -3.7527640949141428,
            ],
            rotation: [
                [0.876134201218856, 0.06925962026449776, 0.47706599800804744],
                [-0.04747421839895102, 0.9972110940209488, -0.057586739349882114],
                [-0.4797239414934443, 0.027805376500959853, 0.8769787916452908],
            ],
            fy: 1164.6601287484507,
            fx: 1159.5880733038064,
        }
    }
}


/// Texture allocation hints for the record stream.
///
/// `size` is the padded texture capacity, not the record byte count.
#[derive(
    Clone,
    Debug,
    PartialEq,
    Serialize,
    Deserialize,
)]
pub struct SplatvHeader {
    #[serde(rename = "type")]
    pub kind: String,
    pub size: usize,
    pub texwidth: usize,
    pub texheight: usize,
    pub cameras: Vec<SplatvCamera>,
}

impl SplatvHeader {
    pub fn new(splat_count: usize) -> Self {
        let texheight = (TEXELS_PER_SPLAT * splat_count).div_ceil(TEXTURE_WIDTH);

        Self {
            kind: SPLATV_TYPE.to_string(),
            size: TEXTURE_WIDTH * texheight * BYTES_PER_TEXEL,
            texwidth: TEXTURE_WIDTH,
            texheight,
            cameras: vec![SplatvCamera::default()],
        }
    }

    /// Compact json of the single element header array.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(std::slice::from_ref(self))?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let headers: Vec<SplatvHeader> = serde_json::from_str(json)?;

        headers
            .into_iter()
            .next()
            .ok_or(SplatvError::EmptyHeader)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE_HEADER: &str = r#"[{"type":"splat","size":30146560,"texwidth":4096,"texheight":460,"cameras":[{"id":0,"img_name":"00001","width":1959,"height":1090,"position":[-3.0089893469241797,-0.11086489695181866,-3.7527640949141428],"rotation":[[0.876134201218856,0.06925962026449776,0.47706599800804744],[-0.04747421839895102,0.9972110940209488,-0.057586739349882114],[-0.4797239414934443,0.027805376500959853,0.8769787916452908]],"fy":1164.6601287484507,"fx":1159.5880733038064}]}]"#;

    #[test]
    fn texture_dimensions() {
        let empty = SplatvHeader::new(0);
        assert_eq!((empty.texheight, empty.size), (0, 0));

        let one = SplatvHeader::new(1);
        assert_eq!((one.texheight, one.size), (1, 65536));

        let full_row = SplatvHeader::new(1024);
        assert_eq!((full_row.texheight, full_row.size), (1, 1024 * 64));

        let spill = SplatvHeader::new(1025);
        assert_eq!((spill.texheight, spill.size), (2, 131072));
    }

    #[test]
    fn json_matches_reference_layout() {
        // 460 rows of 1024 splats
        let header = SplatvHeader::new(460 * 1024);
        assert_eq!(header.to_json().unwrap(), REFERENCE_HEADER);
    }

    #[test]
    fn json_parses_back() {
        let header = SplatvHeader::new(12345);
        let parsed = SplatvHeader::from_json(&header.to_json().unwrap()).unwrap();
        assert_eq!(parsed, header);
        assert_eq!(parsed.cameras[0].position[2], -3.7527640949141428);

        assert!(SplatvHeader::from_json("[]").is_err());
    }
}
