//! Draw a recursive outline with its inside and outside triangles
use clap::Parser;
use fractri::{
    frames::FrameRecorder,
    loader::{Loader, PlainFileLoader},
    perturb::{NoPerturbation, RandomPerturbation},
    Sketch,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// svg file to write the picture to
    #[arg(short, long, default_value = "outline.svg")]
    output: std::path::PathBuf,

    /// also write a step by step html viewer
    #[arg(long)]
    frames: Option<std::path::PathBuf>,

    /// outline file with `x y` per line, replaces the generated outline
    #[arg(short, long)]
    input: Option<std::path::PathBuf>,

    #[arg(long, default_value = "80")]
    radius: f64,

    /// must be even
    #[arg(long, default_value = "6")]
    divisions: usize,

    #[arg(long, default_value = "3")]
    depth: u32,

    /// radians
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    start_angle: f64,

    #[arg(long, default_value = "600")]
    canvas_size: u32,

    /// seed the perturbation for a reproducible outline
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value = "false")]
    no_perturbation: bool,

    #[arg(long, default_value = "1000")]
    frame_limit: usize,
}

fn main() -> Result<(), fractri::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut builder = Sketch::builder()
        .canvas_size(args.canvas_size)
        .radius(args.radius)
        .divisions(args.divisions)
        .depth(args.depth)
        .start_angle(args.start_angle);

    builder = if args.no_perturbation {
        builder.perturbation(NoPerturbation)
    } else if let Some(seed) = args.seed {
        builder.perturbation(RandomPerturbation::seeded(seed))
    } else {
        builder.perturbation(RandomPerturbation::from_entropy())
    };

    if let Some(input) = &args.input {
        let points = PlainFileLoader::default().load(input)?;
        log::info!("loaded {} outline points from {}", points.len(), input.display());
        builder = builder.outline(points);
    }

    let mut sketch = builder.build();

    let output = match &args.frames {
        Some(frames_path) => {
            let mut recorder = FrameRecorder::new(args.canvas_size, sketch.palette().clone())?
                .frame_limit(args.frame_limit);
            let output = sketch.run_with_observer(&mut recorder)?;
            recorder.save(frames_path)?;
            log::info!(
                "wrote {} frames to {}",
                recorder.frames().len(),
                frames_path.display()
            );
            output
        }
        None => sketch.run()?,
    };

    sketch.draw(&output)?.save(&args.output)?;
    log::info!("wrote {}", args.output.display());

    Ok(())
}
