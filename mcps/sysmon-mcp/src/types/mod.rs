//! Response types for system monitor tools
//!
//! Each tool has its own report record; [`ToolReport`] gathers them so every
//! handler ends in the same serialization path.

mod cpu;
mod disk;
mod host;
mod memory;
mod network;
mod process;

pub use cpu::*;
pub use disk::*;
pub use host::*;
pub use memory::*;
pub use network::*;
pub use process::*;

use serde::Serialize;

/// The result of one tool invocation
///
/// Untagged on the wire: each variant serializes as its tool's flat object.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ToolReport {
    Cpu(CpuReport),
    Memory(MemoryReport),
    Disk(DiskReport),
    Network(NetworkReport),
    Host(HostReport),
    ProcessList(ProcessList),
    ProcessDetail(ProcessDetail),
}

impl ToolReport {
    /// Name of the tool that produced this report
    pub fn tool_name(&self) -> &'static str {
        match self {
            ToolReport::Cpu(_) => "get_cpu_info",
            ToolReport::Memory(_) => "get_memory_info",
            ToolReport::Disk(_) => "get_disk_info",
            ToolReport::Network(_) => "get_network_info",
            ToolReport::Host(_) => "get_host_info",
            ToolReport::ProcessList(_) | ToolReport::ProcessDetail(_) => "get_process_info",
        }
    }
}

macro_rules! impl_from_report {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ToolReport {
                fn from(report: $ty) -> Self {
                    ToolReport::$variant(report)
                }
            }
        )*
    };
}

impl_from_report! {
    Cpu => CpuReport,
    Memory => MemoryReport,
    Disk => DiskReport,
    Network => NetworkReport,
    Host => HostReport,
    ProcessList => ProcessList,
    ProcessDetail => ProcessDetail,
}
