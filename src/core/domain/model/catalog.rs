//! Read-only catalog entries offered for installations.

use serde::{Deserialize, Serialize};

/// An installable operating system, from `/operatingSystems`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct OperatingSystem {
    /// e.g. "UBUNTU_22_04_64BIT".
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// A control panel that can be installed alongside an operating system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ControlPanel {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OperatingSystemList {
    #[serde(default)]
    pub operating_systems: Vec<OperatingSystem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ControlPanelList {
    #[serde(default)]
    pub control_panels: Vec<ControlPanel>,
}
