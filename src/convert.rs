use std::path::{
    Path,
    PathBuf,
};

use tracing::{
    error,
    info,
    warn,
};

use crate::{
    error::{
        Result,
        SplatvError,
    },
    io::{
        codec::SplatvCodec,
        ply::load_ply_splats,
        writer::{
            splatv_path_for,
            write_splatv_file,
        },
    },
    utils::SplatvConverterArgs,
};


#[derive(Clone, Debug, PartialEq)]
pub struct ConversionJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// A single input goes to `--output`, several inputs each go to `<input>.splatv`.
pub fn plan_jobs(args: &SplatvConverterArgs) -> Vec<ConversionJob> {
    match args.input_files.as_slice() {
        [input] => vec![ConversionJob {
            input: input.clone(),
            output: args.output_path(),
        }],
        inputs => inputs
            .iter()
            .map(|input| ConversionJob {
                input: input.clone(),
                output: splatv_path_for(input),
            })
            .collect(),
    }
}

/// Reads, encodes, and writes one input, returning the bytes written.
pub fn convert_file(input: &Path, output: &Path) -> Result<usize> {
    let cloud = load_ply_splats(input)?;
    let data = cloud.encode_splatv()?;

    write_splatv_file(&data, output)?;
    Ok(data.len())
}


#[derive(Debug, Default)]
pub struct ConversionReport {
    pub converted: Vec<(ConversionJob, usize)>,
    pub failed: Vec<(ConversionJob, SplatvError)>,
}

impl ConversionReport {
    pub fn succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// True when `--output` was passed explicitly but several inputs make it unused.
pub fn output_ignored(args: &SplatvConverterArgs) -> bool {
    args.input_files.len() > 1 && args.output.is_some()
}

pub fn run(args: &SplatvConverterArgs) -> ConversionReport {
    let jobs = plan_jobs(args);
    if output_ignored(args) {
        warn!("--output is ignored when converting multiple inputs");
    }

    let mut report = ConversionReport::default();

    for job in jobs {
        info!("processing {}...", job.input.display());

        match convert_file(&job.input, &job.output) {
            Ok(bytes) => {
                info!("saved {}", job.output.display());
                report.converted.push((job, bytes));
            }
            Err(err) => {
                error!("failed to convert {}: {err}", job.input.display());
                report.failed.push((job, err));

                if !args.keep_going {
                    break;
                }
            }
        }
    }

    report
}


#[cfg(test)]
mod tests {
    use super::*;

    fn args(inputs: &[&str], output: Option<&str>) -> SplatvConverterArgs {
        SplatvConverterArgs {
            input_files: inputs.iter().map(PathBuf::from).collect(),
            output: output.map(PathBuf::from),
            keep_going: false,
        }
    }

    #[test]
    fn single_input_uses_output() {
        let jobs = plan_jobs(&args(&["scene.ply"], Some("scene.splatv")));

        assert_eq!(jobs, vec![ConversionJob {
            input: PathBuf::from("scene.ply"),
            output: PathBuf::from("scene.splatv"),
        }]);
    }

    #[test]
    fn multiple_inputs_ignore_output() {
        let jobs = plan_jobs(&args(&["a.ply", "dir/b.ply"], Some("ignored.splatv")));

        let outputs = jobs.iter().map(|job| job.output.clone()).collect::<Vec<_>>();
        assert_eq!(outputs, vec![
            PathBuf::from("a.ply.splatv"),
            PathBuf::from("dir/b.ply.splatv"),
        ]);
    }

    #[test]
    fn single_input_defaults_output() {
        let jobs = plan_jobs(&args(&["scene.ply"], None));
        assert_eq!(jobs[0].output, PathBuf::from("output.splat"));
    }

    #[test]
    fn explicit_default_output_is_reported_ignored() {
        assert!(output_ignored(&args(&["a.ply", "b.ply"], Some("output.splat"))));
        assert!(!output_ignored(&args(&["a.ply", "b.ply"], None)));
        assert!(!output_ignored(&args(&["a.ply"], Some("output.splat"))));
    }

    #[test]
    fn stops_at_first_failure_unless_keep_going() {
        let mut run_args = args(&["missing_a.ply", "missing_b.ply"], None);

        let report = run(&run_args);
        assert_eq!(report.failed.len(), 1);
        assert!(report.converted.is_empty());

        run_args.keep_going = true;
        let report = run(&run_args);
        assert_eq!(report.failed.len(), 2);
        assert!(!report.succeeded());
    }
}
