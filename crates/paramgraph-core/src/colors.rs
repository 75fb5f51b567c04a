//! ANSI color palette for graph dumps.
//!
//! - section: `[strings]`, `[inputs]`, ... headers and root keys
//! - name: field and enum names
//! - node: node references (`I3`, `O7`)
//! - dim: flags, masks, and other metadata

#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub section: &'static str,
    pub name: &'static str,
    pub node: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        section: "\x1b[34m",
        name: "\x1b[32m",
        node: "\x1b[36m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        section: "",
        name: "",
        node: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }
}
