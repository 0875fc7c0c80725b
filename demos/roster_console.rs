//! Line-oriented front end for the roster controller.
//!
//! ```text
//! add Ann,1,A      search an      remove 0      all      quit
//! ```

use std::io::{self, BufRead, Write};

use roster::{Alert, AppConfig, RosterApp, StudentForm};

fn render_rows(app: &RosterApp) {
    println!("{:<4} {:<20} {:>12} {:>6}", "#", "Name", "Roll Number", "Grade");
    for (i, s) in app.rows().iter().enumerate() {
        println!("{:<4} {:<20} {:>12} {:>6}", i, s.name, s.roll_number, s.grade);
    }
}

fn render_alert(alert: &Alert) {
    println!("[{:?}] {}", alert.kind, alert.title);
    if let Some(header) = &alert.header {
        println!("  {}", header);
    }
    for line in alert.content.lines() {
        println!("  {}", line);
    }
}

fn ask(stdin: &mut impl BufRead, alert: &Alert) -> bool {
    render_alert(alert);
    print!("  [y/N] ");
    let _ = io::stdout().flush();
    let mut answer = String::new();
    stdin.read_line(&mut answer).is_ok() && answer.trim().eq_ignore_ascii_case("y")
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(io::stderr)
        .init();

    let mut app = RosterApp::new(AppConfig::default());
    println!("{}", app.config().heading);
    println!("({})", app.config().search_prompt);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let (command, rest) = line.trim_end().split_once(' ').unwrap_or((line.trim_end(), ""));
        match command {
            "add" => {
                let mut fields = rest.splitn(3, ',');
                let form = StudentForm::new(
                    fields.next().unwrap_or_default(),
                    fields.next().unwrap_or_default(),
                    fields.next().unwrap_or_default(),
                );
                match app.add_student(&form) {
                    Ok(alert) => render_alert(&alert),
                    Err(e) => render_alert(&e.alert()),
                }
            }
            "remove" => {
                let selected = rest.parse::<usize>().ok().and_then(|i| app.rows().get(i)).cloned();
                if let Some(warning) =
                    app.remove_selected(selected.as_ref(), |prompt| ask(&mut input, prompt))
                {
                    render_alert(&warning);
                }
            }
            "search" => app.search(rest),
            "all" => render_alert(&app.display_all()),
            "quit" => break,
            "" => continue,
            other => println!("unknown command: {}", other),
        }
        render_rows(&app);
    }
}
