#![forbid(unsafe_code)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use creneaux::{audit, io, PreferenceStore, ScheduleGenerator, ShiftSlot};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de planning par préférences (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lister les 21 créneaux disponibles
    Slots,

    /// Générer un planning à partir des préférences
    Generate {
        /// CSV `name,slots` (créneaux séparés par `;`)
        #[arg(long)]
        prefs: Option<String>,
        /// Préférence en ligne "Nom=Monday - Morning;Tuesday-Evening" (répétable)
        #[arg(long = "pref")]
        inline: Vec<String>,
        /// Graine pour rejouer un tirage
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
        /// Export CSV par créneau
        #[arg(long)]
        by_slot: Option<String>,
    },

    /// Vérifier un planning exporté contre les préférences
    Check {
        #[arg(long)]
        prefs: String,
        #[arg(long)]
        assignment: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let code = match cli.cmd {
        Commands::Slots => {
            for slot in ShiftSlot::all() {
                println!("{slot}");
            }
            0
        }
        Commands::Generate {
            prefs,
            inline,
            seed,
            out_json,
            out_csv,
            by_slot,
        } => {
            let mut store = PreferenceStore::new();
            if let Some(path) = prefs {
                io::import_preferences_csv(path, &mut store)?;
            }
            for raw in &inline {
                let (name, labels) = io::parse_inline_preference(raw)?;
                store.submit_labels(&name, labels)?;
            }

            if store.is_empty() {
                eprintln!("no preferences submitted (use --prefs or --pref)");
                // Code 2 = WARNING/INCOMPLETE
                2
            } else {
                let mut generator = match seed {
                    Some(seed) => ScheduleGenerator::with_seed(seed),
                    None => ScheduleGenerator::new(),
                };
                let assignment = generator.generate(store.snapshot());

                if let Some(path) = out_json {
                    io::export_assignment_json(path, &assignment)?;
                }
                if let Some(path) = out_csv {
                    io::export_assignment_csv(path, &assignment)?;
                }
                if let Some(path) = by_slot {
                    io::export_by_slot_csv(path, &assignment)?;
                }
                print!("{}", io::render_table(&assignment));
                0
            }
        }
        Commands::Check { prefs, assignment } => {
            let mut store = PreferenceStore::new();
            io::import_preferences_csv(prefs, &mut store)?;
            let assignment = io::import_assignment_json(assignment)?;
            let violations = audit(store.snapshot(), &assignment);
            if violations.is_empty() {
                println!("OK: no violations");
                0
            } else {
                eprintln!("Found {} violation(s)", violations.len());
                for v in &violations {
                    println!("{v}");
                }
                2
            }
        }
    };

    std::process::exit(code);
}
