use chrono::{Local, NaiveDate};
use clap::Parser;
use std::io::{self, Write};
use std::str::FromStr;
use tracing_subscriber::{fmt, EnvFilter};
use wellnest::application::session::{drive, sleep_one_tick};
use wellnest::application::wellness::positive_sleep;
use wellnest::application::{init, manage_config, ConfigService, MoodService, WellnessService};
use wellnest::cli::output;
use wellnest::cli::validate;
use wellnest::cli::{
    Cli, Commands, MealCommand, MoodCommand, SleepCommand, StretchCommand, WaterCommand,
    WeightCommand, WorkoutCommand,
};
use wellnest::domain::coach::Coach;
use wellnest::domain::mood::DEFAULT_ACTIVITY_TAGS;
use wellnest::domain::session::{
    format_clock, BreathingConfig, BreathingEvent, BreathingSession, ExerciseEvent, ExerciseTimer,
    StretchEvent, StretchSequence,
};
use wellnest::domain::wellness::{
    Meal, MealType, SleepEntry, SleepEntryPatch, StretchRoutine, WeightEntry, WeightEntryPatch,
    WorkoutRoutine,
};
use wellnest::domain::{format_date, MoodEntry, MoodRange, MoodType};
use wellnest::error::{CoachError, Result, ValidationError, WellnessError};
use wellnest::infrastructure::{Config, FileSystemRepository, StateRepository};

fn main() {
    init_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

// Logs go to stderr so command output stays clean on stdout
fn init_logging() {
    let filter =
        EnvFilter::try_from_env("WELLNEST_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let today = match &cli.today {
        Some(value) => validate::date(value)?,
        None => Local::now().date_naive(),
    };

    let Some(command) = cli.command else {
        println!("wellnest - Terminal mood and wellness tracker");
        println!("Use --help for usage information");
        return Ok(());
    };

    match command {
        Commands::Init { path } => init::init(&path, today),
        Commands::Config { key, value, list } => run_config(key, value, list),
        Commands::Status => run_status(today),
        Commands::Mood { action } => run_mood(action, today),
        Commands::Water { action } => run_water(action, today),
        Commands::Meal { action } => run_meal(action, today),
        Commands::Sleep { action } => run_sleep(action, today),
        Commands::Workout { action } => run_workout(action, today),
        Commands::Stretch { action } => run_stretch(action, today),
        Commands::Weight { action } => run_weight(action, today),
        Commands::Breathe => run_breathe(),
        Commands::Coach { message } => run_coach(&message.join(" ")),
    }
}

fn run_config(key: Option<String>, value: Option<String>, list: bool) -> Result<()> {
    let repo = FileSystemRepository::discover()?;
    let service = ConfigService::new(repo);

    if list {
        let config = service.list()?;
        for (k, v) in manage_config::entries(&config) {
            println!("{} = {}", k, v);
        }
    } else if let Some(k) = key {
        if let Some(v) = value {
            service.set(&k, &v)?;
            println!("Set {} = {}", k, v);
        } else {
            println!("{}", service.get(&k)?);
        }
    } else {
        println!("Usage: wellnest config [--list | <key> [<value>]]");
        println!(
            "Valid keys: created, {}",
            manage_config::SETTABLE_KEYS.join(", ")
        );
    }
    Ok(())
}

fn open_services(today: NaiveDate) -> Result<(Config, MoodService, WellnessService)> {
    let repo = FileSystemRepository::discover()?;
    let config = repo.load_config()?;
    let mood = MoodService::open(repo.clone(), today)?;
    let wellness = WellnessService::open(repo, today)?;
    Ok((config, mood, wellness))
}

fn open_wellness(today: NaiveDate) -> Result<(Config, WellnessService)> {
    let repo = FileSystemRepository::discover()?;
    let config = repo.load_config()?;
    Ok((config, WellnessService::open(repo, today)?))
}

fn days_or_default(days: Option<String>, config: &Config) -> Result<u32> {
    match days {
        Some(days) => validate::whole_in_range("days", &days, 1, 365),
        None => Ok(config.recent_days),
    }
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn run_status(today: NaiveDate) -> Result<()> {
    let (config, mood, wellness) = open_services(today)?;

    println!("wellnest status for {}", format_date(today));
    println!();

    match mood.todays_entry() {
        Some(entry) => println!("Mood:    {} {}", entry.mood.emoji(), entry.mood.label()),
        None => println!("Mood:    not logged yet"),
    }

    let water = wellness.water();
    println!(
        "Water:   {}/{} cups ({:.0}%)",
        water.cups,
        water.goal,
        water.percent_complete()
    );
    println!(
        "Meals:   {} logged, {} kcal",
        wellness.today_meals().len(),
        wellness.today_calories()
    );

    match wellness.recent_sleep_entries(config.recent_days).last() {
        Some(entry) => println!(
            "Sleep:   {} hours ({})",
            entry.hours_slept,
            format_date(entry.date)
        ),
        None => println!("Sleep:   no recent entries"),
    }

    match wellness.current_workout() {
        Some(routine) => println!(
            "Workout: {} {}/{} done",
            routine.name,
            routine.completed_count(),
            routine.exercises.len()
        ),
        None => println!("Workout: no routines"),
    }

    let weights = wellness.recent_weight_entries(config.recent_days);
    match weights.iter().max_by_key(|e| e.date) {
        Some(entry) => println!(
            "Weight:  {:.1} kg ({})",
            entry.weight,
            format_date(entry.date)
        ),
        None => println!("Weight:  no recent entries"),
    }

    Ok(())
}

fn run_mood(action: MoodCommand, today: NaiveDate) -> Result<()> {
    let repo = FileSystemRepository::discover()?;
    let config = repo.load_config()?;
    let mut service = MoodService::open(repo, today)?;

    match action {
        MoodCommand::Log {
            mood,
            level,
            note,
            tags,
        } => {
            let mood = MoodType::from_str(validate::required("mood", &mood)?)
                .map_err(ValidationError::InvalidChoice)?;
            let level = validate::whole_in_range("level", &level, 1, 10)? as u8;
            let tags: Vec<String> = tags
                .iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect();

            let entry = MoodEntry::new(today, mood, level)
                .with_note(note.trim())
                .with_tags(tags);
            service.log_mood(entry)?;

            println!("Mood logged for {}", format_date(today));
            if let Some(entry) = service.todays_entry() {
                println!("{}", output::format_mood_entry(entry));
            }
        }
        MoodCommand::Today => match service.todays_entry() {
            Some(entry) => println!("{}", output::format_mood_entry(entry)),
            None => println!("No mood logged for {}", format_date(today)),
        },
        MoodCommand::Chart { range } => {
            let range = match range {
                Some(range) => MoodRange::from_str(&range).map_err(ValidationError::InvalidChoice)?,
                None => config.mood_range,
            };
            print!("{}", output::format_mood_chart(&service.chart(range)));
        }
        MoodCommand::List => println!("{}", output::format_mood_list(service.entries())),
        MoodCommand::Tags => println!("{}", DEFAULT_ACTIVITY_TAGS.join(", ")),
    }
    Ok(())
}

fn run_water(action: WaterCommand, today: NaiveDate) -> Result<()> {
    let (_, mut service) = open_wellness(today)?;

    let water = match action {
        WaterCommand::Add => service.add_water_cup()?,
        WaterCommand::Remove => service.remove_water_cup()?,
        WaterCommand::Reset => service.reset_water_intake()?,
        WaterCommand::Status => service.water(),
        WaterCommand::Goal { cups } => {
            let goal = validate::whole_in_range("goal", &cups, 1, 50)?;
            service.set_water_goal(goal)?
        }
    };

    println!("{}", output::format_water(&water));
    Ok(())
}

fn run_meal(action: MealCommand, today: NaiveDate) -> Result<()> {
    let (_, mut service) = open_wellness(today)?;

    match action {
        MealCommand::Add {
            name,
            calories,
            time,
            meal_type,
        } => {
            let name = validate::required("name", &name)?;
            let calories = validate::number("calories", &calories)?;
            validate::in_range("calories", calories, 0.0, 10_000.0)?;
            let time = match time {
                Some(time) => validate::time(&time)?,
                None => validate::time(&Local::now().format("%H:%M").to_string())?,
            };
            let meal_type =
                MealType::from_str(&meal_type).map_err(ValidationError::InvalidChoice)?;

            let id = service.add_meal(Meal::new(today, name, calories, time, meal_type))?;
            println!("Meal added: {} ({} kcal) [{}]", name, calories, id);
        }
        MealCommand::Delete { id } => {
            service.delete_meal(&id)?;
            println!("Meal deleted: {}", id);
        }
        MealCommand::List => {
            println!(
                "{}",
                output::format_meal_list(&service.today_meals(), service.today_calories())
            );
        }
    }
    Ok(())
}

fn run_sleep(action: SleepCommand, today: NaiveDate) -> Result<()> {
    let (config, mut service) = open_wellness(today)?;

    match action {
        SleepCommand::Add {
            bed,
            wake,
            date,
            quality,
            notes,
        } => {
            let bed = validate::time(&bed)?;
            let wake = validate::time(&wake)?;
            let hours = positive_sleep(bed, wake)?;
            let date = match date {
                Some(date) => validate::date(&date)?,
                None => today,
            };
            let quality = validate::whole_in_range("quality", &quality, 1, 5)? as u8;

            let mut entry = SleepEntry::new(date, bed, wake).with_quality(quality);
            if let Some(notes) = optional_text(notes) {
                entry = entry.with_notes(notes);
            }
            let id = service.add_sleep_entry(entry)?;
            println!("Sleep entry saved: {} hours on {} [{}]", hours, format_date(date), id);
        }
        SleepCommand::Update {
            id,
            bed,
            wake,
            quality,
            notes,
        } => {
            if bed.is_none() && wake.is_none() && quality.is_none() && notes.is_none() {
                return Err(
                    ValidationError::MissingField("--bed, --wake, --quality or --notes").into(),
                );
            }
            let patch = SleepEntryPatch {
                bed_time: bed.as_deref().map(validate::time).transpose()?,
                wake_time: wake.as_deref().map(validate::time).transpose()?,
                quality: quality
                    .as_deref()
                    .map(|q| validate::whole_in_range("quality", q, 1, 5).map(|q| q as u8))
                    .transpose()?,
                notes: notes.map(|n| n.trim().to_string()),
                ..Default::default()
            };
            service.update_sleep_entry(&id, patch)?;
            println!("Sleep entry updated: {}", id);
        }
        SleepCommand::Recent { days } => {
            let days = days_or_default(days, &config)?;
            println!(
                "{}",
                output::format_sleep_table(&service.recent_sleep_entries(days))
            );
        }
    }
    Ok(())
}

fn run_workout(action: WorkoutCommand, today: NaiveDate) -> Result<()> {
    let (_, mut service) = open_wellness(today)?;

    match action {
        WorkoutCommand::Show => match service.current_workout() {
            Some(routine) => print!("{}", output::format_workout(routine)),
            None => println!("No workout routines"),
        },
        WorkoutCommand::Add { name, exercises } => {
            let name = validate::required("name", &name)?;
            let exercises = exercises
                .iter()
                .enumerate()
                .map(|(order, input)| validate::workout_exercise(input, order))
                .collect::<Result<Vec<_>>>()?;
            let id = service.add_workout_routine(WorkoutRoutine::new(name, today, exercises))?;
            println!("Workout routine added: {} [{}]", name, id);
        }
        WorkoutCommand::Done { exercise_id, undo } => {
            let routine = service.set_exercise_completed(&exercise_id, !undo)?;
            print!("{}", output::format_workout(&routine));
        }
        WorkoutCommand::Select { id } => {
            let id = selection(&id);
            service.select_workout(id)?;
            match service.current_workout() {
                Some(routine) => println!("Current workout: {} [{}]", routine.name, routine.id),
                None => println!("No workout routines"),
            }
        }
        WorkoutCommand::Timer {
            exercise_id,
            complete,
        } => {
            let exercise = service
                .state()
                .workout_for_exercise(&exercise_id)
                .and_then(|r| r.exercise(&exercise_id))
                .cloned()
                .ok_or_else(|| WellnessError::NotFound {
                    kind: "exercise",
                    id: exercise_id.clone(),
                })?;

            let mut timer = ExerciseTimer::new();
            timer.start(&exercise);
            println!("{}: {}", exercise.name, format_clock(timer.time_left()));

            let mut finished = false;
            drive(&mut timer, sleep_one_tick, |timer, event| {
                show_countdown(timer.time_left());
                if let Some(ExerciseEvent::Complete { .. }) = event {
                    finished = true;
                }
            });
            println!();

            if finished {
                println!("{} complete!", exercise.name);
                if complete {
                    let routine = service.set_exercise_completed(&exercise.id, true)?;
                    print!("{}", output::format_workout(&routine));
                }
            }
        }
    }
    Ok(())
}

fn run_stretch(action: StretchCommand, today: NaiveDate) -> Result<()> {
    let (_, mut service) = open_wellness(today)?;

    match action {
        StretchCommand::Show => match service.current_stretch_routine() {
            Some(routine) => print!("{}", output::format_stretch_routine(routine)),
            None => println!("No stretch routines"),
        },
        StretchCommand::Add { name, exercises } => {
            let name = validate::required("name", &name)?;
            let exercises = exercises
                .iter()
                .enumerate()
                .map(|(order, input)| validate::stretch_exercise(input, order))
                .collect::<Result<Vec<_>>>()?;
            let id = service.add_stretch_routine(StretchRoutine::new(name, exercises))?;
            println!("Stretch routine added: {} [{}]", name, id);
        }
        StretchCommand::Move {
            exercise_id,
            target_id,
        } => {
            let routine = service.move_stretch_exercise(&exercise_id, &target_id)?;
            print!("{}", output::format_stretch_routine(&routine));
        }
        StretchCommand::Select { id } => {
            service.select_stretch_routine(selection(&id))?;
            match service.current_stretch_routine() {
                Some(routine) => {
                    println!("Current stretch routine: {} [{}]", routine.name, routine.id)
                }
                None => println!("No stretch routines"),
            }
        }
        StretchCommand::Run => {
            let Some(routine) = service.current_stretch_routine() else {
                println!("No stretch routines");
                return Ok(());
            };
            let mut sequence = StretchSequence::new(routine.exercises.clone());
            if !sequence.start() {
                println!("{} has no exercises", routine.name);
                return Ok(());
            }
            if let Some(first) = sequence.active_exercise() {
                println!("{} ({})", first.name, format_clock(first.duration));
            }

            drive(&mut sequence, sleep_one_tick, |sequence, event| match event {
                Some(StretchEvent::Next { name, .. }) => {
                    println!();
                    println!("{} ({})", name, format_clock(sequence.time_left()));
                }
                Some(StretchEvent::Complete) => {
                    println!();
                    println!("Stretch routine complete!");
                }
                None => show_countdown(sequence.time_left()),
            });
        }
    }
    Ok(())
}

fn run_weight(action: WeightCommand, today: NaiveDate) -> Result<()> {
    let (config, mut service) = open_wellness(today)?;

    match action {
        WeightCommand::Add { kg, note } => {
            let weight = validate::number("weight", &kg)?;
            validate::in_range("weight", weight, 1.0, 500.0)?;
            let mut entry = WeightEntry::new(today, weight);
            if let Some(note) = optional_text(note) {
                entry = entry.with_note(note);
            }
            let id = service.add_weight_entry(entry)?;
            println!("Weight recorded: {:.1} kg [{}]", weight, id);
        }
        WeightCommand::Edit { id, weight, note } => {
            if weight.is_none() && note.is_none() {
                return Err(ValidationError::MissingField("--weight or --note").into());
            }
            let weight = match weight {
                Some(w) => {
                    let w = validate::number("weight", &w)?;
                    Some(validate::in_range("weight", w, 1.0, 500.0)?)
                }
                None => None,
            };
            let patch = WeightEntryPatch {
                weight,
                note: note.map(|n| n.trim().to_string()),
                ..Default::default()
            };
            service.update_weight_entry(&id, patch)?;
            println!("Weight entry updated: {}", id);
        }
        WeightCommand::Delete { id } => {
            service.delete_weight_entry(&id)?;
            println!("Weight entry deleted: {}", id);
        }
        WeightCommand::List { days } => {
            let days = days_or_default(days, &config)?;
            print!(
                "{}",
                output::format_weight_table(&service.recent_weight_entries(days))
            );
        }
    }
    Ok(())
}

fn run_breathe() -> Result<()> {
    let config = match FileSystemRepository::discover().and_then(|repo| repo.load_config()) {
        Ok(config) => config.breathing,
        Err(WellnessError::NotWellnessDirectory(_)) => BreathingConfig::default(),
        Err(e) => return Err(e),
    };

    let mut session = BreathingSession::new(config);
    session.start();
    println!(
        "Breathing: {} cycles of {}-{}-{}",
        session.total_cycles(),
        config.inhale,
        config.hold,
        config.exhale
    );
    println!("{}", session.phase().instructions());

    drive(&mut session, sleep_one_tick, |session, event| match event {
        Some(BreathingEvent::Phase(phase)) => {
            println!();
            println!("{}", phase.instructions());
        }
        Some(BreathingEvent::Finished) => {
            println!();
            println!("Session complete: {} cycles", session.cycles());
        }
        None => show_countdown(session.seconds_left()),
    });
    Ok(())
}

fn run_coach(message: &str) -> Result<()> {
    let message = validate::required("message", message)?;
    match Coach::new().reply(message, &[]) {
        Ok(reply) => {
            println!("{}", reply.content);
            Ok(())
        }
        Err(CoachError::MissingCredential) => {
            tracing::warn!("no completion backend configured for the coach");
            Err(CoachError::MissingCredential.into())
        }
        Err(e) => Err(e.into()),
    }
}

/// `none` clears a routine selection
fn selection(id: &str) -> Option<String> {
    if id.eq_ignore_ascii_case("none") {
        None
    } else {
        Some(id.to_string())
    }
}

fn show_countdown(seconds: u32) {
    print!("\r  {} ", format_clock(seconds));
    let _ = io::stdout().flush();
}
