mod api;
mod controller;
mod models;
mod utils;
mod view;

use clap::Parser;
use colored::Colorize;
use eyre::{Result, WrapErr, bail};
use log::{info, warn};

use crate::api::{Backend, HttpBackend};
use crate::controller::generate::QuestionPicker;
use crate::controller::{FlowOutcome, ViewController};
use crate::utils::cli::{Args, Command, GenerateArgs};
use crate::utils::config::{Config, config};
use crate::utils::log::Logger;
use crate::utils::select_question::TerminalPicker;
use crate::view::Page;
use crate::view::page::{COVER_LETTER, JOB_SEARCH};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    Logger::init(args.verbosity);

    info!(
        "starting resume-desk {}",
        format!("v{}", env!("CARGO_PKG_VERSION")).magenta()
    );

    let config: Config = config(args.config)?;
    info!("using resume service at {}", config.server.base_url);

    let backend = HttpBackend::new(&config);
    let page = form_page(&config);

    let outcome = match args.command {
        Command::Search { spec } => {
            page.search_spec.set_value(spec);
            let controller = ViewController::new(backend, page.clone());
            controller.show_section(JOB_SEARCH);
            let outcome = controller.search().await;
            print_search(controller.page());
            outcome
        }
        Command::Generate(generate) => {
            fill_cover_letter_form(&page, &generate).await?;
            if generate.pick_question {
                run_generate(ViewController::with_picker(backend, TerminalPicker, page.clone())).await
            } else {
                run_generate(ViewController::new(backend, page.clone())).await
            }
        }
    };

    for alert in page.alerts.take() {
        warn!("{}", alert);
    }

    if let Some(path) = args.html {
        page.write_html(&path).await?;
    }

    match outcome {
        FlowOutcome::Completed => Ok(()),
        FlowOutcome::Ignored | FlowOutcome::Rejected => {
            bail!("company, job and spec must not be blank")
        }
        FlowOutcome::Failed | FlowOutcome::Superseded => bail!("request to the resume service failed"),
    }
}

fn form_page(config: &Config) -> Page {
    let page = Page::new();
    page.language.set_value(config.defaults.language.clone());
    page.char_limit
        .set_value(config.defaults.char_limit.to_string());
    page.use_example.set_checked(config.defaults.use_example);
    page
}

async fn fill_cover_letter_form(page: &Page, args: &GenerateArgs) -> Result<()> {
    let spec = match (&args.spec, &args.spec_file) {
        (Some(spec), _) => spec.clone(),
        (None, Some(path)) => {
            info!("reading spec from file: {}", path.display());
            tokio::fs::read_to_string(path)
                .await
                .wrap_err_with(|| format!("failed to read {}", path.display()))?
        }
        (None, None) => String::new(),
    };

    page.company_name.set_value(args.company.clone());
    page.job_title.set_value(args.job.clone());
    page.my_spec.set_value(spec);

    if let Some(language) = &args.language {
        page.language.set_value(language.clone());
    }
    if let Some(limit) = args.char_limit {
        page.char_limit.set_value(limit.to_string());
    }
    if args.use_example {
        page.use_example.set_checked(true);
    }

    Ok(())
}

async fn run_generate<B: Backend, P: QuestionPicker>(controller: ViewController<B, P>) -> FlowOutcome {
    controller.show_section(COVER_LETTER);
    controller.on_input();
    let outcome = controller.generate().await;
    print_generate(controller.page());
    outcome
}

fn print_search(page: &Page) {
    println!("{}", page.search_results.to_terminal());
}

fn print_generate(page: &Page) {
    if !page.company_info.is_empty() {
        println!("\n{}", "=== Company ===".cyan().bold());
        println!("{}", page.company_info.to_terminal());
    }

    let question = page.selected_question.value();
    if !question.is_empty() {
        println!("\n{} {}", "Question:".cyan().bold(), question);
    }

    if !page.resume_section.is_hidden() {
        println!("\n{}", "=== Cover Letter ===".cyan().bold());
        println!("{}", page.resume_text.value());
    }

    if !page.feedback_section.is_hidden() {
        println!("\n{}", "=== Feedback ===".cyan().bold());
        println!("{}", page.feedback_text.value());
    }
}
