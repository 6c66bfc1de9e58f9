use std::{
    fs::File,
    io::{
        BufRead,
        BufReader,
    },
    path::Path,
};

use ply_rs::{
    parser::Parser,
    ply::{
        DefaultElement,
        ElementDef,
        Property,
        PropertyAccess,
        PropertyType,
    },
};
use tracing::debug;

use crate::{
    error::{
        Result,
        SplatvError,
    },
    gaussian::{
        cloud::SplatCloud,
        splat::Splat,
    },
};


pub const VERTEX_ELEMENT: &str = "vertex";

pub const REQUIRED_PROPERTIES: [&str; 29] = [
    "x", "y", "z",
    "rot_0", "rot_1", "rot_2", "rot_3",
    "scale_0", "scale_1", "scale_2",
    "opacity",
    "f_dc_0", "f_dc_1", "f_dc_2",
    "motion_0", "motion_1", "motion_2", "motion_3", "motion_4",
    "motion_5", "motion_6", "motion_7", "motion_8",
    "omega_0", "omega_1", "omega_2", "omega_3",
    "trbf_center", "trbf_scale",
];


fn scalar_value(property: Property) -> Option<f32> {
    match property {
        Property::Float(v) => Some(v),
        Property::Double(v) => Some(v as f32),
        Property::Char(v) => Some(v as f32),
        Property::UChar(v) => Some(v as f32),
        Property::Short(v) => Some(v as f32),
        Property::UShort(v) => Some(v as f32),
        Property::Int(v) => Some(v as f32),
        Property::UInt(v) => Some(v as f32),
        _ => None,
    }
}

fn indexed(key: &str, prefix: &str, count: usize) -> Option<usize> {
    key.strip_prefix(prefix)
        .and_then(|i| i.parse::<usize>().ok())
        .filter(|&i| i < count)
}

impl PropertyAccess for Splat {
    fn new() -> Self {
        Splat::default()
    }

    fn set_property(&mut self, key: String, property: Property) {
        let Some(v) = scalar_value(property) else {
            return;
        };

        match key.as_ref() {
            "x" => self.position[0] = v,
            "y" => self.position[1] = v,
            "z" => self.position[2] = v,
            "opacity" => self.logit_opacity = v,
            "trbf_center" => self.trbf_center = v,
            "trbf_scale" => self.log_trbf_scale = v,
            key => {
                if let Some(i) = indexed(key, "rot_", 4) {
                    self.rotation[i] = v;
                } else if let Some(i) = indexed(key, "scale_", 3) {
                    self.log_scale[i] = v;
                } else if let Some(i) = indexed(key, "f_dc_", 3) {
                    self.color_dc[i] = v;
                } else if let Some(i) = indexed(key, "motion_", self.motion.len()) {
                    self.motion[i] = v;
                } else if let Some(i) = indexed(key, "omega_", self.omega.len()) {
                    self.omega[i] = v;
                }
            }
        }
    }
}


/// Every required property must be declared as a scalar on the vertex element.
pub fn check_vertex_schema(element: &ElementDef) -> Result<()> {
    let mut missing = Vec::new();

    for name in REQUIRED_PROPERTIES {
        match element.properties.get(name).map(|prop| &prop.data_type) {
            Some(PropertyType::Scalar(_)) => {}
            Some(PropertyType::List(_, _)) => return Err(SplatvError::ListProperty(name.to_string())),
            None => missing.push(name),
        }
    }

    if !missing.is_empty() {
        return Err(SplatvError::Schema { missing });
    }

    Ok(())
}

pub fn parse_ply_splats(mut reader: &mut dyn BufRead) -> Result<SplatCloud> {
    let splat_parser = Parser::<Splat>::new();
    let header = splat_parser.read_header(&mut reader)?;

    for (_key, element) in &header.elements {
        if element.name != VERTEX_ELEMENT {
            // payloads are sequential, skip elements declared before the vertices
            Parser::<DefaultElement>::new().read_payload_for_element(&mut reader, element, &header)?;
            continue;
        }

        check_vertex_schema(element)?;

        let splats = splat_parser.read_payload_for_element(&mut reader, element, &header)?;
        debug!("read {} splats from ply", splats.len());

        return Ok(SplatCloud::from_splats(splats));
    }

    Err(SplatvError::MissingVertexElement)
}

#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_ply_splats(path: impl AsRef<Path>) -> Result<SplatCloud> {
    let file = File::open(path.as_ref())?;
    let mut reader = BufReader::new(file);

    parse_ply_splats(&mut reader)
}
