use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use tracing_subscriber::EnvFilter;

use outliner::{OutlineRenderer, Session, SessionConfig, Snapshot};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let matches = Command::new("outliner")
        .about("Render a design-document snapshot as a readable text outline")
        .arg(
            Arg::new("input")
                .help("Snapshot JSON file captured from the host document")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("page")
                .long("page")
                .help("Ignore the recorded selection and render the whole page")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let input_file = matches.get_one::<String>("input").unwrap();
    let snapshot = Snapshot::from_path(input_file)?;

    let output = if matches.get_flag("page") {
        let page = snapshot.page.clone();
        OutlineRenderer.render(std::slice::from_ref(&page))
    } else {
        let session = Session::new(snapshot, SessionConfig::default());
        session.render_from_selection_or_page()
    };

    println!("{}", output);

    Ok(())
}
