use anyhow::anyhow;

use crate::cli::ParseArgs;
use crate::cli_error::CliError;
use crate::output::OutputFormatter;

pub(crate) fn parse(args: ParseArgs, out: &dyn OutputFormatter) -> Result<(), CliError> {
    let mut failed = 0usize;
    for input in &args.inputs {
        let result = stout_duration::parse(input);
        match &result {
            Ok(d) => tracing::debug!(input = input.as_str(), nanos = d.ns(), "parsed duration"),
            Err(err) => {
                tracing::debug!(input = input.as_str(), kind = %err.kind(), "rejected duration");
                failed += 1;
            }
        }
        out.parsed(input, &result, args.unit);
    }

    if failed > 0 {
        return Err(CliError::InvalidInput(anyhow!(
            "{failed} of {} durations could not be parsed",
            args.inputs.len()
        )));
    }
    Ok(())
}
