//! External solver backend driven through the LP text format.
//!
//! The model is written to `<work_dir>/lp.lp`, the configured program is run
//! with the model path as its last argument, and its complete standard output
//! is saved to `<work_dir>/lp.out` before being parsed.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::lp::{format, LpModel, LpSolution, LpSolver};

pub const DEFAULT_PROGRAM: &str = "lp_solve";
pub const MODEL_FILE: &str = "lp.lp";
pub const OUTPUT_FILE: &str = "lp.out";

const OBJECTIVE_PREFIX: &str = "Value of objective function:";
const VARIABLES_HEADER: &str = "Actual values of the variables";
const CONSTRAINTS_HEADER: &str = "Actual values of the constraints";

#[derive(Debug, Clone)]
pub struct LpSolveProcess {
    program: OsString,
    args: Vec<OsString>,
    work_dir: PathBuf,
}

impl Default for LpSolveProcess {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl LpSolveProcess {
    pub fn new<S: Into<OsString>>(program: S) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            work_dir: PathBuf::from("."),
        }
    }

    /// Extra arguments placed before the model path.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_work_dir<P: Into<PathBuf>>(mut self, work_dir: P) -> Self {
        self.work_dir = work_dir.into();
        self
    }

    pub fn model_path(&self) -> PathBuf {
        self.work_dir.join(MODEL_FILE)
    }

    pub fn output_path(&self) -> PathBuf {
        self.work_dir.join(OUTPUT_FILE)
    }

    fn write_model_file(&self, model: &LpModel, path: &Path) -> Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        format::write_model(model, &mut out)?;
        out.flush()?;
        Ok(())
    }
}

impl LpSolver for LpSolveProcess {
    fn solve(&self, model: &LpModel) -> Result<LpSolution> {
        let model_path = self.model_path();
        self.write_model_file(model, &model_path)?;
        debug!(
            "running {:?} on {} ({} variables, {} constraints)",
            self.program,
            model_path.display(),
            model.num_variables(),
            model.constraints().len()
        );

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(&model_path)
            .output()
            .map_err(|err| {
                Error::SolverUnavailable(format!("cannot run {:?}: {}", self.program, err))
            })?;
        fs::write(self.output_path(), &output.stdout)?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        match parse_output(&stdout, model) {
            Ok(solution) => Ok(solution),
            Err(err @ (Error::Infeasible | Error::Unbounded)) => Err(err),
            Err(err) if !output.status.success() => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                warn!("{:?} exited with {}: {}", self.program, output.status, err);
                Err(Error::SolverUnavailable(format!(
                    "{:?} exited with {}: {}",
                    self.program,
                    output.status,
                    stderr.trim()
                )))
            }
            Err(err) => Err(err),
        }
    }

    fn name(&self) -> &str {
        "lp_solve"
    }
}

/// Parses the result printed by `lp_solve` for `model`.
///
/// Every variable of the model must appear exactly once in the variables
/// section; values are returned in model variable order.
pub fn parse_output(text: &str, model: &LpModel) -> Result<LpSolution> {
    let lowered = text.to_ascii_lowercase();
    if lowered.contains("infeasible") {
        return Err(Error::Infeasible);
    }
    if lowered.contains("unbounded") {
        return Err(Error::Unbounded);
    }

    let mut lines = text.lines();
    let mut objective = None;
    let mut saw_header = false;
    for line in lines.by_ref() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix(OBJECTIVE_PREFIX) {
            objective = Some(parse_value(rest.trim(), "objective")?);
        } else if line.starts_with(VARIABLES_HEADER) {
            saw_header = true;
            break;
        }
    }
    let objective = objective.ok_or_else(|| {
        Error::MalformedSolverOutput("missing objective function line".to_owned())
    })?;
    if !saw_header {
        return Err(Error::MalformedSolverOutput(
            "missing variables section".to_owned(),
        ));
    }

    let mut values: Vec<Option<f64>> = vec![None; model.num_variables()];
    let mut found = 0;
    for line in lines {
        let line = line.trim();
        if line.is_empty() || line.starts_with(CONSTRAINTS_HEADER) {
            break;
        }
        let mut tokens = line.split_whitespace();
        let (name, value) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(name), Some(value), None) => (name, value),
            _ => {
                return Err(Error::MalformedSolverOutput(format!(
                    "unexpected variable line `{}`",
                    line
                )))
            }
        };
        let position = model.position_of_name(name).ok_or_else(|| {
            Error::MalformedSolverOutput(format!("unknown variable `{}`", name))
        })?;
        if values[position].is_some() {
            return Err(Error::MalformedSolverOutput(format!(
                "variable `{}` reported twice",
                name
            )));
        }
        values[position] = Some(parse_value(value, name)?);
        found += 1;
    }

    if found != model.num_variables() {
        return Err(Error::MalformedSolverOutput(format!(
            "expected {} variable lines, found {}",
            model.num_variables(),
            found
        )));
    }

    Ok(LpSolution {
        objective,
        values: values.into_iter().flatten().collect(),
    })
}

fn parse_value(token: &str, what: &str) -> Result<f64> {
    token.parse().map_err(|_| {
        Error::MalformedSolverOutput(format!("`{}` is not a number for {}", token, what))
    })
}
