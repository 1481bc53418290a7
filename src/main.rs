use std::cell::RefCell;

use clap::Parser;

use chat_screen::ChatError;
use chat_screen::app::{ChatApp, ChatOptions};
use chat_screen::cli::ChatCli;
use chat_screen::drivers::console::{ConsoleInputDriver, ConsoleOutputDriver};
use chat_screen::event_loop::EventLoop;
use chat_screen::{tracing_sub, view};

fn main() -> Result<(), ChatError> {
    let cli = ChatCli::parse();
    tracing_sub::init(cli.log_file.as_deref(), cli.verbose)?;
    let options = ChatOptions::try_from(&cli)?;
    let app = RefCell::new(ChatApp::new(options)?);
    tracing::info!(state = ?app.borrow().screen().state(), "chat screen mounted");

    let mut output = ConsoleOutputDriver::new()?;
    output.enter()?;
    let mut event_loop = EventLoop::new(ConsoleInputDriver::new(), cli.poll_interval());
    let result = event_loop.run(
        || {
            let mut app = app.borrow_mut();
            app.commit_pending();
            output.draw(|frame| view::render(frame, &app))
        },
        |event| Ok(app.borrow_mut().handle_event(event)),
    );
    output.exit()?;
    result?;
    Ok(())
}
