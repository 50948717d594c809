//! Textual LP format understood by `lp_solve`.
//!
//! ```text
//! min: x1 + x2 + x3;
//! x1 >= 0;
//! x1 <= 1;
//! ...
//! x1 + x2 >= 1;
//! ```

use std::fmt;
use std::io::{self, Write};

use crate::lp::LpModel;

/// Renders the model as an objective line, two bound lines per variable and
/// one line per edge constraint.
impl fmt::Display for LpModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let objective = (0..self.num_variables())
            .map(LpModel::variable_name)
            .collect::<Vec<_>>()
            .join(" + ");
        writeln!(f, "min: {};", objective)?;

        for position in 0..self.num_variables() {
            let name = LpModel::variable_name(position);
            writeln!(f, "{} >= 0;", name)?;
            writeln!(f, "{} <= 1;", name)?;
        }

        for constraint in self.constraints() {
            writeln!(
                f,
                "{} + {} >= 1;",
                LpModel::variable_name(constraint.left),
                LpModel::variable_name(constraint.right)
            )?;
        }
        Ok(())
    }
}

/// Writes `model` in LP text form to `out`.
pub fn write_model<W: Write>(model: &LpModel, out: &mut W) -> io::Result<()> {
    write!(out, "{}", model)
}

pub fn to_lp_string(model: &LpModel) -> String {
    model.to_string()
}
