use std::io::{self, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;

use foldeval::evaluation::{
    ConfusionMatrix, Report, ReportFormat, macro_average, micro_average, one_vs_rest,
};
use foldeval::tasks::{CrossValidation, FoldSnapshot};
use foldeval::ui::cli::args::{Cli, Command};
use foldeval::ui::types::build::build_learner;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const FG_CYAN: &str = "\x1b[36m";
const FG_GREEN: &str = "\x1b[32m";
const FG_MAGENTA: &str = "\x1b[35m";
const FG_GREY: &str = "\x1b[90m";

fn main() -> Result<()> {
    let cli = Cli::parse();
    let Command::Run(args) = cli.command;

    let dataset = foldeval::data::load_dataset(&args.data, args.delimiter, args.skip_header)
        .with_context(|| format!("failed to load {}", args.data.display()))?;

    let choices = args.learner_choices()?;
    let dump_format = args.dump_format()?;
    let folds = args.folds as usize;

    println!("{BOLD}{FG_CYAN}▶ K-Fold Evaluation{RESET}");
    println!(
        "{DIM}data={}{RESET}  {DIM}rows={}{RESET}  {DIM}attributes={}{RESET}  {DIM}classes={}{RESET}  {DIM}folds={}{RESET}  {}",
        args.data.display(),
        dataset.len(),
        dataset.number_of_attributes(),
        dataset.classes(),
        folds,
        timestamp_now()
    );
    println!(
        "{FG_GREY}────────────────────────────────────────────────────────────────────────{RESET}"
    );

    let mut report = Report::default();
    for (label, choice) in &choices {
        println!("{FG_MAGENTA}{BOLD}▸ {label}{RESET}");

        let learner = build_learner(choice);
        let mut runner = CrossValidation::new(folds, learner, dataset.clone())
            .with_context(|| format!("failed to construct evaluation for '{label}'"))?;
        if let Some(seed) = args.shuffle_seed {
            runner = runner.with_shuffle(seed);
        }

        let (tx, rx) = mpsc::channel();
        let mut runner = runner.with_progress(tx);
        let render: JoinHandle<()> = std::thread::spawn(move || render_progress(rx, 150));

        let outcome = runner
            .run()
            .with_context(|| format!("evaluation of '{label}' failed"));

        match outcome {
            Ok(()) => {
                report.push(runner.summary(label.clone())?);
                if args.confusion {
                    print_confusion(&runner, dataset.vocabulary().names())?;
                }
                if args.roc {
                    print_roc(&runner, dataset.classes(), dataset.vocabulary().names())?;
                }
                drop(runner);
                let _ = render.join();
            }
            Err(e) => {
                drop(runner);
                let _ = render.join();
                return Err(e);
            }
        }
    }

    println!(
        "{FG_GREY}────────────────────────────────────────────────────────────────────────{RESET}"
    );
    println!("{BOLD}classifier,precision,recall,f_score{RESET}");
    for row in report.rows() {
        println!("{row}");
    }

    if let Some(path) = args.dump_file
        && !path.as_os_str().is_empty()
    {
        report
            .export(&path, ReportFormat::from(dump_format))
            .with_context(|| format!("failed to export report to {}", path.display()))?;
    }

    Ok(())
}

/// Repaints a single status line per snapshot, then prints the final state
/// once the runner hangs up.
fn render_progress(rx: Receiver<FoldSnapshot>, repaint_every_ms: u64) {
    let tick = Duration::from_millis(repaint_every_ms);
    let mut last_draw = Instant::now();
    let mut last_snap: Option<FoldSnapshot> = None;

    loop {
        match rx.recv_timeout(tick) {
            Ok(s) => last_snap = Some(s),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                if let Some(s) = last_snap.take() {
                    print!("\r{}\x1B[K\n", format_status(&s));
                    let _ = io::stdout().flush();
                }
                break;
            }
        }

        if last_draw.elapsed() >= tick {
            if let Some(s) = last_snap.as_ref() {
                print!("\r{}\x1B[K", format_status(s));
                let _ = io::stdout().flush();
            }
            last_draw = Instant::now();
        }
    }
}

fn format_status(s: &FoldSnapshot) -> String {
    format!(
        "{FG_GREEN}{BOLD}fold{RESET} {:>2}/{:<2} \
         {FG_CYAN}{BOLD}acc{RESET} {:>7.3}% \
         {DIM}rows{RESET} {:>7}  \
         {DIM}fit{RESET} {:>8.3}s  {DIM}predict{RESET} {:>8.3}s  {}",
        s.fold,
        s.folds,
        s.running_accuracy * 100.0,
        s.rows_evaluated,
        s.fit_seconds,
        s.predict_seconds,
        progress_bar(s.fold as f64, s.folds as f64, 15)
    )
}

fn progress_bar(current: f64, total: f64, width: usize) -> String {
    if total.is_finite() && total > 0.0 {
        let ratio = (current / total).clamp(0.0, 1.0);
        let filled = (ratio * width as f64).round() as usize;
        let empty = width.saturating_sub(filled);
        return format!(
            "[{}{}] {:>3.0}%",
            "█".repeat(filled),
            "░".repeat(empty),
            ratio * 100.0
        );
    }

    String::new()
}

fn print_confusion(runner: &CrossValidation, names: &[String]) -> Result<()> {
    let cm = ConfusionMatrix::from_labels_with_classes(
        runner.truth(),
        runner.predictions(),
        names.len(),
    )?;

    let width = names
        .iter()
        .map(String::len)
        .chain((0..cm.classes()).map(|t| {
            (0..cm.classes())
                .map(|p| cm.count(t, p).to_string().len())
                .max()
                .unwrap_or(1)
        }))
        .max()
        .unwrap_or(1);

    print!("{DIM}t\\p{RESET} ");
    for name in names {
        print!(" {name:>width$}");
    }
    println!();

    for (t, name) in names.iter().enumerate() {
        print!("{name:>3} ");
        for p in 0..cm.classes() {
            print!(" {:>width$}", cm.count(t, p));
        }
        println!();
    }
    Ok(())
}

fn print_roc(runner: &CrossValidation, classes: usize, names: &[String]) -> Result<()> {
    let curves = one_vs_rest(runner.truth(), runner.predictions(), classes)?;
    for (class, curve) in curves.iter().enumerate() {
        let name = names.get(class).map_or("?", String::as_str);
        println!("{DIM}auc[{name}]{RESET} {:.3}", curve.area);
    }

    let micro = micro_average(runner.truth(), runner.predictions(), classes)?;
    let macro_ = macro_average(runner.truth(), runner.predictions(), classes)?;
    println!(
        "{DIM}auc[micro]{RESET} {:.3}  {DIM}auc[macro]{RESET} {:.3}",
        micro.area, macro_.area
    );
    Ok(())
}

fn timestamp_now() -> String {
    use chrono::{Local, SecondsFormat};
    let now = Local::now();
    format!(
        "{DIM}{}{}",
        now.to_rfc3339_opts(SecondsFormat::Secs, true),
        RESET
    )
}
