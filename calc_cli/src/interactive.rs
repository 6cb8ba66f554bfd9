//! Interactive session: add, list and remove forces, then compute.

use std::io::{self, BufRead, Write};

use log::{debug, info};

use calc_core::scenario::Scenario;
use calc_core::session::Session;

use crate::input::{parse_optional, Prompter};
use crate::render::Renderer;

const MENU: &str = "\
[a] add force  [l] list  [d] delete  [c] clear
[r] resultant  [b] body dynamics  [j] JSON  [q] quit";

/// Run the menu loop until `q` or end of input.
pub fn run<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>, renderer: Renderer) -> io::Result<Session> {
    let mut session = Session::new();

    loop {
        prompter.say("")?;
        prompter.say(MENU)?;
        let Some(choice) = prompter.line("> ")? else {
            break;
        };
        debug!("menu choice '{}'", choice);

        match choice.as_str() {
            "a" => {
                let force = prompter.force(&session.next_label())?;
                let index = session.add(force);
                let added = &session.forces()[index];
                prompter.say(&format!("Force '{}' added.", added.name))?;
                prompter.say(&renderer.force(index, added))?;
            }
            "l" => {
                if session.is_empty() {
                    prompter.say("No forces yet. Use [a] to add one.")?;
                }
                for (index, force) in session.forces().iter().enumerate() {
                    prompter.say(&renderer.force(index, force))?;
                }
            }
            "d" => {
                let index = prompter.line("Force number to delete: ")?.as_deref().and_then(parse_optional);
                match index.filter(|i| *i >= 1.0 && i.fract() == 0.0) {
                    Some(n) => match session.remove(n as usize - 1) {
                        Ok(force) => prompter.say(&format!("Removed '{}'.", force.name))?,
                        Err(e) => prompter.say(&format!("Error: {}", e))?,
                    },
                    None => prompter.say("Enter a force number from the list.")?,
                }
            }
            "c" => {
                session.reset();
                prompter.say("Force list cleared.")?;
            }
            "r" => {
                if session.is_empty() {
                    prompter.say("Add forces to compute the resultant.")?;
                } else {
                    let resultant = session.resultant();
                    prompter.say(&renderer.resultant(resultant.as_ref()))?;
                }
            }
            "b" => {
                let body = prompter.body()?.normalized();
                if body.is_blank() {
                    prompter.say("Enter at least one body value to analyse.")?;
                } else {
                    let record = session.resolve(&body);
                    info!("body dynamics classified as {:?}", record.kind);
                    prompter.say(&renderer.dynamics(&record))?;
                }
            }
            "j" => {
                let scenario = Scenario {
                    forces: session.forces().to_vec(),
                    body: None,
                };
                let report = scenario.solve();
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => prompter.say(&json)?,
                    Err(e) => prompter.say(&format!("Error: {}", e))?,
                }
            }
            "q" => break,
            "" => {}
            other => prompter.say(&format!("Unknown option '{}'.", other))?,
        }
    }

    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> (Session, String) {
        let mut prompter = Prompter::new(script.as_bytes(), Vec::new());
        let session = run(&mut prompter, Renderer::new(2)).unwrap();
        let output = String::from_utf8(prompter.into_writer()).unwrap();
        (session, output)
    }

    const ADD_POLAR_100_120: &str = "a\n\n100\n120\n\n\n\n\n\n\n\n";
    const ADD_POLAR_80_30: &str = "a\n\n80\n30\n\n\n\n\n\n\n\n";

    #[test]
    fn test_add_and_resultant() {
        let script = format!("{}{}r\nq\n", ADD_POLAR_100_120, ADD_POLAR_80_30);
        let (session, output) = run_script(&script);

        assert_eq!(session.len(), 2);
        assert_eq!(session.forces()[1].name, "F2");
        assert!(output.contains("Force 'F1' added."));
        assert!(output.contains("Resultant |F|:    128.06 N"));
    }

    #[test]
    fn test_delete_and_clear() {
        let script = format!("{}{}d\n1\nd\n9\nc\n", ADD_POLAR_100_120, ADD_POLAR_80_30);
        let (session, output) = run_script(&script);

        assert!(output.contains("Removed 'F1'."));
        assert!(output.contains("Error: Invalid input for 'index'"));
        assert!(output.contains("Force list cleared."));
        assert!(session.is_empty());
    }

    #[test]
    fn test_body_dynamics() {
        let (_, output) = run_script("b\n60\n\n0.5\n\n\nq\n");
        assert!(output.contains("Missing force:    30.00 N"));

        let (_, blank) = run_script("b\n\n\n\n\n\nq\n");
        assert!(blank.contains("Enter at least one body value"));
    }

    #[test]
    fn test_unknown_option() {
        let (_, output) = run_script("x\n");
        assert!(output.contains("Unknown option 'x'."));
    }
}
