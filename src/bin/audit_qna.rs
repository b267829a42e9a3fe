//! audit-qna — print the audit questions and answers.

use auditqna::cli::args::parse_or_exit;
use auditqna::cli::{OutputCtx, QnaCli, write_error};
use auditqna::commands;
use auditqna::types::ErrorOutput;

fn main() {
    let cli: QnaCli = parse_or_exit();

    let ctx = OutputCtx::new(cli.output, cli.json, cli.no_header, cli.debug);

    match commands::report::run(&cli, &ctx) {
        Ok(()) => {}
        Err(err) => {
            let error_output = ErrorOutput::from_audit_error(&err);
            write_error(&error_output, false);
            std::process::exit(err.exit_code());
        }
    }
}
