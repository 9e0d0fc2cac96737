pub mod report;
pub mod snapshot;

pub use report::{
    cell_text, ReportDataset, ReportMetadata, ReportRequest, ReportResponse, ReportRow, CUSTOM_PERIOD,
    REPORT_PERIODS, REPORT_TYPES,
};
pub use snapshot::{
    DashboardSnapshot, EnergyBalance, LabeledSeries, MeterReading, PeakReading, RelayState,
};
