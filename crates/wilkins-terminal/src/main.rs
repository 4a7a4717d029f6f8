use eyre::Result;
use tokio::io::BufReader;
use tracing::Instrument;

use wilkins_protocol::wizard::WizardState;
use wilkins_terminal::config;
use wilkins_terminal::logging;
use wilkins_terminal::session::Session;

fn main() -> Result<()> {
    color_eyre::install()?;

    // Logs go to stderr so the screens on stdout stay readable.
    let path = config::config_path()?;
    let format = config::log_format_hint(&path);
    let subscriber = logging::subscriber(format, logging::env_filter(), std::io::stderr);
    tracing::subscriber::set_global_default(subscriber)?;

    let first_run = !path.exists();
    let config = config::load_config_from(&path)?;
    if first_run {
        config::save_config_to(&path, &config)?;
    }
    tracing::info!(
        path = %path.display(),
        output_dir = %config.output_dir.display(),
        "config loaded"
    );

    let today = jiff::Zoned::now().date();
    let mut session = Session::new(WizardState::new(today), config);
    let span = tracing::info_span!("session", id = %session.id);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let run = async {
        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = std::io::stdout();
        session.run(stdin, &mut stdout).await
    };
    runtime.block_on(run.instrument(span))
}
