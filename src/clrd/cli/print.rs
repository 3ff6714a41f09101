use clrd::api::{CmdMessage, MessageLevel};
use colored::Colorize;
use std::io::{self, Write};

pub(super) fn print_messages(messages: &[CmdMessage]) {
    let stdout = io::stdout();
    // write errors (closed pipe) are ignored
    let _ = write_messages(&mut stdout.lock(), messages);
}

fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
        }
    }
    Ok(())
}
