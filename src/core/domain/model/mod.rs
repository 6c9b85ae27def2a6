pub mod catalog;
pub mod credential;
pub mod dhcp_lease;
pub mod ip;
pub mod job;
pub mod network_interface;
pub mod notification_setting;
pub mod power_info;
pub mod server;

pub use catalog::{ControlPanel, OperatingSystem};
pub use credential::Credential;
pub use dhcp_lease::{DhcpLease, Lease};
pub use ip::Ip;
pub use job::{Job, Payload};
pub use network_interface::{NetworkInterfaceInfo, NetworkType};
pub use notification_setting::{NotificationSetting, NotificationType};
pub use power_info::{PowerInfo, PowerStatus};
pub use server::{Contract, InterfaceAddress, Location, NetworkInterfaces, Server};
