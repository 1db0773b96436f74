use std::{
    error::Error,
    fmt::Display,
    fs::File,
    io::{Read, Write},
    path::PathBuf,
};

use json::JsonValue;

use crate::classifier::ShadowPolicy;

/// Settings for one masking run, read from a JSON file.
///
/// `sort_files` controls whether the driver visits PNGs in lexicographic
/// order or raw directory order. When absent it follows the policy:
/// `narrow` runs sorted, `broad` runs in directory order, matching the
/// scripts each policy was lifted from.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub image_dir: PathBuf,
    pub policy: ShadowPolicy,
    pub sort_files: bool,
}

impl RunConfig {
    fn to_config(json_string: String) -> Result<RunConfig, Box<dyn std::error::Error>> {
        let json = json::parse(json_string.as_str())?;

        let image_dir = match json["image_dir"].as_str() {
            Some(val) => PathBuf::from(val),
            None => return ConfigError::get("Couldn't parse image_dir"),
        };

        let policy = match json["policy"].as_str() {
            Some(s) => match s {
                "broad" => ShadowPolicy::Broad,
                "narrow" => ShadowPolicy::Narrow,
                _ => return ConfigError::get("Not recognized policy"),
            },
            None => return ConfigError::get("Couldn't parse policy"),
        };

        let sort_files = match json["sort_files"].as_bool() {
            Some(val) => val,
            None if json["sort_files"].is_null() => policy == ShadowPolicy::Narrow,
            None => return ConfigError::get("Couldn't parse sort_files"),
        };

        Ok(RunConfig {
            image_dir,
            policy,
            sort_files,
        })
    }

    fn to_json(config: &RunConfig) -> String {
        let mut data = json::JsonValue::new_object();

        data["image_dir"] = config.image_dir.to_string_lossy().into_owned().into();
        data["policy"] = config.policy.into();
        data["sort_files"] = config.sort_files.into();

        data.to_string()
    }

    pub fn read_config(path: &String) -> Result<RunConfig, Box<dyn std::error::Error>> {
        let mut file = File::open(path)?;
        let mut buff: Vec<u8> = Vec::new();
        let _ = file.read_to_end(&mut buff)?;

        let json_string = String::from_utf8(buff)?;

        RunConfig::to_config(json_string)
    }

    pub fn write_config(&self, path: String) -> Result<(), Box<dyn std::error::Error>> {
        let string = RunConfig::to_json(self);
        let mut file = File::create(path)?;
        file.write_all(string.as_bytes())?;
        Ok(())
    }
}

impl From<ShadowPolicy> for JsonValue {
    fn from(policy: ShadowPolicy) -> Self {
        match policy {
            ShadowPolicy::Broad => JsonValue::String(String::from("broad")),
            ShadowPolicy::Narrow => JsonValue::String(String::from("narrow")),
        }
    }
}

#[derive(Debug)]
pub struct ConfigError {
    msg: String,
}

impl ConfigError {
    fn get(msg: &str) -> Result<RunConfig, Box<dyn std::error::Error>> {
        Err(Box::new(ConfigError {
            msg: String::from(msg),
        }))
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("ConfigParseError {}", self.msg))
    }
}
impl Error for ConfigError {}
