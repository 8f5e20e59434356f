/// Use cases module containing application workflow orchestration
mod generate_report;

pub use generate_report::GenerateReportUseCase;
