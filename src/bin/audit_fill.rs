//! audit-fill — deduplicate the audit question file and optionally fill answers.

use auditqna::cli::args::parse_or_exit;
use auditqna::cli::{FillCli, OutputCtx, OutputFormat, write_error};
use auditqna::commands;
use auditqna::types::ErrorOutput;

fn main() {
    let cli: FillCli = parse_or_exit();

    let ctx = OutputCtx::new(OutputFormat::Transcript, cli.json, false, cli.debug);

    match commands::fill::run(&cli, &ctx) {
        Ok(()) => {}
        Err(err) => {
            let error_output = ErrorOutput::from_audit_error(&err);
            write_error(&error_output, cli.json);
            std::process::exit(err.exit_code());
        }
    }
}
