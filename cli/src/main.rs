use chime_cli::commands;
use chime_cli::stdin_lines;
use chime_cli::ticker;
use chime_cli::CliContext;
use std::io::Write;

/// Which prompt the next input line answers.
///
/// One line is read per loop iteration and dispatched on the current
/// mode; a fired alarm switches the mode to `AlarmResponse` until the
/// user gives a valid snooze/dismiss answer.
#[derive(Clone, Copy, PartialEq, Eq)]
enum InputMode {
    Menu,
    CreateAlarm,
    DeleteAlarm,
    AlarmResponse { id: u64 },
}

enum Flow {
    Continue(InputMode),
    Quit,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let ctx = CliContext::new();

    let mut fired = ticker::init_ticker(&ctx).await;
    let mut lines = stdin_lines();

    let mut mode = InputMode::Menu;
    print_prompt(&mode)?;

    loop {
        tokio::select! {
            Some(alarm) = fired.recv() => {
                // Interrupt whatever prompt is pending
                println!();
                println!("Alarm! Time: {}", alarm.time);
                mode = InputMode::AlarmResponse { id: alarm.id };
                print_prompt(&mode)?;
            }
            line = lines.recv() => {
                let Some(line) = line else {
                    break; // stdin closed
                };

                match respond(line.trim(), mode, &ctx).await {
                    Flow::Continue(next) => {
                        mode = next;
                        print_prompt(&mode)?;
                    }
                    Flow::Quit => break,
                }
            }
        }
    }

    ctx.tasks.lock().await.abort_all().await;
    Ok(())
}

async fn respond(line: &str, mode: InputMode, ctx: &CliContext) -> Flow {
    match mode {
        InputMode::Menu => match line {
            "1" => {
                commands::show_time();
                Flow::Continue(InputMode::Menu)
            }
            "2" => Flow::Continue(InputMode::CreateAlarm),
            "3" => {
                if commands::list_alarms(ctx).await {
                    Flow::Continue(InputMode::DeleteAlarm)
                } else {
                    Flow::Continue(InputMode::Menu)
                }
            }
            "4" => {
                commands::list_alarms(ctx).await;
                Flow::Continue(InputMode::Menu)
            }
            "5" => {
                commands::exit();
                Flow::Quit
            }
            _ => {
                println!("------Invalid Choice, Choose among------");
                Flow::Continue(InputMode::Menu)
            }
        },
        InputMode::CreateAlarm => {
            commands::create_alarm(line, ctx).await;
            Flow::Continue(InputMode::Menu)
        }
        InputMode::DeleteAlarm => {
            commands::delete_alarm(line, ctx).await;
            Flow::Continue(InputMode::Menu)
        }
        InputMode::AlarmResponse { id } => match line {
            "1" => {
                commands::snooze_alarm(id, ctx).await;
                Flow::Continue(InputMode::Menu)
            }
            "2" => {
                commands::dismiss_alarm(id, ctx).await;
                Flow::Continue(InputMode::Menu)
            }
            _ => {
                println!("Invalid choice. Please type \"1\" to snooze or \"2\" to dismiss.");
                Flow::Continue(InputMode::AlarmResponse { id })
            }
        },
    }
}

fn print_prompt(mode: &InputMode) -> Result<(), String> {
    match mode {
        InputMode::Menu => print!(
            "Choose an option:\n\
             1. Display current time\n\
             2. Create alarms\n\
             3. Delete alarms\n\
             4. List alarms\n\
             5. Exit\n\
             Your choice: "
        ),
        InputMode::CreateAlarm => print!("Set alarm (e.g., 1 23:30): "),
        InputMode::DeleteAlarm => print!("Enter the number of the alarm you want to delete: "),
        InputMode::AlarmResponse { .. } => {
            print!("Type \"1\" to snooze for 5 minutes or \"2\" to dismiss: ")
        }
    }
    std::io::stdout().flush().map_err(|e| e.to_string())
}
