use clap::Parser;

#[cfg(feature = "tooling")]
use byte_unit::{Byte, UnitType};

#[cfg(feature = "tooling")]
use splatv::convert::ConversionReport;
use splatv::{
    convert::run,
    utils::{
        SplatvConverterArgs,
        setup_logging,
    },
};


#[cfg(feature = "tooling")]
fn log_output_sizes(report: &ConversionReport) {
    for (job, bytes) in &report.converted {
        let size = Byte::from_u64(*bytes as u64);
        tracing::info!(
            "output file size of {}: {:.2}",
            job.output.display(),
            size.get_appropriate_unit(UnitType::Decimal),
        );
    }
}

fn main() -> std::process::ExitCode {
    setup_logging();

    let args = SplatvConverterArgs::parse();
    let report = run(&args);

    #[cfg(feature = "tooling")]
    log_output_sizes(&report);

    if report.succeeded() {
        std::process::ExitCode::SUCCESS
    } else {
        std::process::ExitCode::FAILURE
    }
}
