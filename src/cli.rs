// src/cli.rs
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};

use crate::{
    config::{
        ConfigStore, ConfigUpdate, Configuration, Settings, parse_schedule,
        schedule::next_run,
        settings::parse_user_date,
    },
    core::sanitize::split_list,
    notify::{ConsoleNotifier, Notifier, TelegramNotifier},
    runner::{self, Pipeline},
    scrape::{self, RetryPolicy, WebSource},
};

#[derive(Debug, Parser)]
#[command(name = "snc_watch", version, about = "Watch the SNC contract listing and report new matches")]
pub struct Cli {
    /// More logging (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Telegram bot token; without it reports go to stdout.
    #[arg(long, env = "BOT_TOKEN", global = true, hide_env_values = true)]
    pub bot_token: Option<String>,

    /// Comma-separated Telegram chat ids to notify.
    #[arg(long, env = "CHAT_IDS", global = true)]
    pub chat_ids: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the full listing, most recent first.
    Fetch {
        /// Emit JSON instead of text blocks.
        #[arg(long)]
        json: bool,
    },
    /// Run the pipeline once and notify.
    Report(FilterArgs),
    /// Run now, then on every tick of the crontab.
    Watch(FilterArgs),
    /// Show the effective configuration and next scheduled run.
    Config(FilterArgs),
}

#[derive(Debug, Default, Args)]
pub struct FilterArgs {
    /// RIFs to keep, comma-separated (e.g. G200003391,G200038179).
    #[arg(long = "rif")]
    pub rifs: Vec<String>,

    /// Description keywords, comma-separated (e.g. PETRO,GAS,TUBERIA).
    #[arg(long = "keyword")]
    pub keywords: Vec<String>,

    /// Only contracts dated strictly after this day (DD/MM/YYYY). Defaults to yesterday.
    #[arg(long = "from", value_parser = parse_user_date)]
    pub from_date: Option<NaiveDate>,

    /// Cron expression, 5 fields (min hour dom month dow) or 6/7 with seconds.
    #[arg(long, env = "SNC_CRONTAB", value_parser = check_crontab)]
    pub crontab: Option<String>,
}

impl FilterArgs {
    /// The updates these flags imply, in application order.
    pub fn updates(&self) -> Vec<ConfigUpdate> {
        let mut out = Vec::new();
        let rifs = flatten_lists(&self.rifs);
        if !rifs.is_empty() {
            out.push(ConfigUpdate::AddRifs(rifs));
        }
        let keywords = flatten_lists(&self.keywords);
        if !keywords.is_empty() {
            out.push(ConfigUpdate::AddKeywords(keywords));
        }
        if let Some(d) = self.from_date {
            out.push(ConfigUpdate::SetFromDate(d));
        }
        if let Some(expr) = &self.crontab {
            out.push(ConfigUpdate::SetSchedule(expr.clone()));
        }
        out
    }

    pub fn store(&self) -> ConfigStore {
        let store = ConfigStore::new(Configuration::default());
        for u in self.updates() {
            store.update(u);
        }
        store
    }
}

fn flatten_lists(values: &[String]) -> Vec<String> {
    values.iter().flat_map(|v| split_list(v)).map(String::from).collect()
}

fn check_crontab(s: &str) -> Result<String, String> {
    parse_schedule(s).map(|_| s!(s.trim())).map_err(|e| e.to_string())
}

pub fn run(cli: Cli) -> Result<()> {
    let settings = Settings::new(cli.bot_token, cli.chat_ids.as_deref());

    match cli.command {
        Command::Fetch { json } => fetch(json),
        Command::Report(args) => {
            let store = args.store();
            let summary = with_pipeline(&settings, &store, |p| Ok(runner::run_once(p)))?;
            match summary.fetch_error {
                Some(e) => Err(e).wrap_err("report run failed"),
                None => Ok(()),
            }
        }
        Command::Watch(args) => {
            let store = args.store();
            logf!("Watching with configuration:\n{}", store.snapshot().human_readable());
            with_pipeline(&settings, &store, |p| Ok(runner::watch(p)?))
        }
        Command::Config(args) => {
            let cfg = args.store().snapshot();
            println!("Configuration:\n{}", cfg.human_readable());
            let schedule = parse_schedule(&cfg.crontab)?;
            if let Some(next) = next_run(&schedule, &Local::now()) {
                println!("Next run: {next}");
            }
            println!("Recipients: {}", recipients(&settings));
            Ok(())
        }
    }
}

fn fetch(json: bool) -> Result<()> {
    let source = WebSource::listing()?;
    let contracts = scrape::fetch_contracts(&source, &RetryPolicy::default())
        .wrap_err_with(|| format!("fetching {}", source.url()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&contracts)?);
    } else {
        for c in &contracts {
            println!("{c}");
        }
    }
    Ok(())
}

/// Build the live pipeline around `store` and hand it to `f`.
fn with_pipeline<T>(
    settings: &Settings,
    store: &ConfigStore,
    f: impl FnOnce(&Pipeline<'_>) -> Result<T>,
) -> Result<T> {
    let source = WebSource::listing()?;
    let notifier = notifier(settings)?;
    let pipeline = Pipeline {
        source: &source,
        policy: RetryPolicy::default(),
        store,
        notifier: notifier.as_ref(),
    };
    f(&pipeline)
}

fn notifier(settings: &Settings) -> Result<Box<dyn Notifier>> {
    match (&settings.bot_token, settings.telegram_ready()) {
        (Some(token), true) => Ok(Box::new(TelegramNotifier::new(token, settings.chat_ids.clone())?)),
        (Some(_), false) => {
            logw!("BOT_TOKEN set but no valid CHAT_IDS; reporting to stdout");
            Ok(Box::new(ConsoleNotifier))
        }
        (None, _) => Ok(Box::new(ConsoleNotifier)),
    }
}

fn recipients(settings: &Settings) -> String {
    if settings.telegram_ready() {
        format!("telegram chats {:?}", settings.chat_ids)
    } else {
        s!("stdout")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("snc_watch").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn filter_flags_become_updates() {
        let cli = parse(&["report", "--rif", "g1,g2", "--rif", "J3", "--keyword", "gas", "--from", "10/06/2024"]);
        let Command::Report(args) = cli.command else { panic!("expected report") };
        let cfg = args.store().snapshot();
        assert_eq!(cfg.rif_filters.iter().collect::<Vec<_>>(), ["G1", "G2", "J3"]);
        assert!(cfg.keyword_filters.contains("GAS"));
        assert_eq!(cfg.from_date, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
    }

    #[test]
    fn bad_date_is_rejected_by_parser() {
        let res = Cli::try_parse_from(["snc_watch", "report", "--from", "2024-06-10"]);
        assert!(res.is_err());
    }

    #[test]
    fn bad_crontab_is_rejected_by_parser() {
        let res = Cli::try_parse_from(["snc_watch", "watch", "--crontab", "whenever"]);
        assert!(res.is_err());
    }

    #[test]
    fn no_flags_no_updates() {
        assert!(FilterArgs::default().updates().is_empty());
    }

    #[test]
    fn verbosity_counts() {
        let cli = parse(&["-vv", "fetch", "--json"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Fetch { json: true }));
    }
}
