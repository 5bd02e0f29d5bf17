// Copyright 2024 The p11check developers
// See LICENSE.txt file for terms

//! Harness configuration.
//!
//! Describes which module a test run targets and the key generation
//! defaults, loaded from a TOML file and overridable from environment
//! variables. Module loading itself happens in the embedding fixture;
//! the harness only carries the settings to it.

use std::env;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::interface::*;

use serde::de;
use serde::{Deserialize, Serialize};

#[cfg(not(test))]
const DEFAULT_CONF_DIR: &str = {
    match option_env!("CONFDIR") {
        Some(p) => p,
        None => "/usr/local/etc",
    }
};
#[cfg(test)]
const DEFAULT_CONF_DIR: &str = "test";

/// File name searched for in the configuration directories
pub const DEFAULT_CONF_NAME: &str = "p11check.conf";

/// The test run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the PKCS#11 module shared object under test
    pub module: Option<String>,
    /// Reserved initialization argument string handed to the module
    pub initargs: Option<String>,
    /// Slot the test token lives in
    pub slot: u64,
    /// User PIN for sessions that need a login
    pub pin: Option<String>,
    /// Modulus size in bits for generated RSA key pairs
    pub modulus_bits: u64,
    /// Public exponent for generated RSA key pairs, hex encoded
    pub public_exponent: String,
}

impl Default for Config {
    fn default() -> Config {
        Config::new()
    }
}

fn config_error<E: de::Error + 'static>(error: E) -> Error {
    Error::ck_rv_from_error(CKR_TOKEN_NOT_RECOGNIZED, error)
}

impl Config {
    /// Creates a configuration with built-in defaults
    pub fn new() -> Config {
        Config {
            module: None,
            initargs: None,
            slot: 0,
            pin: None,
            modulus_bits: 1024,
            public_exponent: String::from("010001"),
        }
    }

    /// Locates the configuration file
    pub fn find_conf() -> Result<String> {
        /* First check for our own env var,
         * this has the highest precedence */
        match env::var("P11CHECK_CONF") {
            Ok(var) => return Ok(var),
            Err(_) => (),
        }
        /* Freedesktop specification for config dirs first,
         * then fallback to $HOME/.config, then the system store */
        let conffile = match env::var("XDG_CONFIG_HOME") {
            Ok(xdg) => format!("{}/p11check/{}", xdg, DEFAULT_CONF_NAME),
            Err(_) => match env::var("HOME") {
                Ok(home) => {
                    format!("{}/.config/p11check/{}", home, DEFAULT_CONF_NAME)
                }
                Err(_) => format!(
                    "{}/p11check/{}",
                    DEFAULT_CONF_DIR, DEFAULT_CONF_NAME
                ),
            },
        };
        if Path::new(&conffile).is_file() {
            Ok(conffile)
        } else {
            Err(CKR_ARGUMENTS_BAD)?
        }
    }

    /// Parses a configuration from a TOML string
    pub fn from_str(config_str: &str) -> Result<Config> {
        let conf: Config = toml::from_str(config_str).map_err(config_error)?;
        Ok(conf)
    }

    /// Loads a configuration from a TOML file
    pub fn from_file(filename: &str) -> Result<Config> {
        let config_str = fs::read_to_string(filename)?;
        Self::from_str(&config_str)
    }

    /// Loads the default configuration, falling back to built-in
    /// defaults when no file is found
    pub fn default_config() -> Result<Config> {
        match Self::find_conf() {
            Ok(filename) => Self::from_file(&filename),
            Err(_) => Ok(Config::new()),
        }
    }

    /// Applies environment variable overrides on top of the loaded
    /// values
    pub fn load_env_vars_overrides(&mut self) {
        if let Ok(var) = env::var("P11CHECK_MODULE") {
            self.module = Some(var);
        }
        if let Ok(var) = env::var("P11CHECK_INITARGS") {
            self.initargs = Some(var);
        }
        if let Ok(var) = env::var("P11CHECK_SLOT") {
            if let Ok(slot) = var.parse::<u64>() {
                self.slot = slot;
            }
        }
        if let Ok(var) = env::var("P11CHECK_PIN") {
            self.pin = Some(var);
        }
    }

    /// Returns the configured slot as a CK_SLOT_ID
    pub fn slot_id(&self) -> Result<CK_SLOT_ID> {
        Ok(CK_SLOT_ID::try_from(self.slot)?)
    }

    /// Returns the configured modulus size as a CK_ULONG
    pub fn modulus_bits(&self) -> Result<CK_ULONG> {
        Ok(CK_ULONG::try_from(self.modulus_bits)?)
    }

    /// Returns the configured public exponent as big-endian bytes
    pub fn public_exponent(&self) -> Result<Vec<u8>> {
        Ok(hex::decode(&self.public_exponent)?)
    }
}
