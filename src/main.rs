use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use gradient_mesh::mesh::Mesh;
use gradient_mesh::render::FrameRenderer;
use gradient_mesh::scene::{Scene, DEFAULT_COLUMNS, DEFAULT_ROWS};
use gradient_mesh::window::{FrameLimiter, Window, WindowEvent, DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(Parser, Debug)]
#[command(name = "gradient-mesh", about = "Render an interactive gradient mesh")]
struct Args {
    /// Surface width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    /// Surface height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    /// Lattice columns in the animated scene
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    columns: usize,

    /// Lattice rows in the animated scene
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Render a mesh from an OBJ file instead of the animated scene
    #[arg(long)]
    obj: Option<PathBuf>,

    /// Render a single frame to this PNG file and exit
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

fn run(args: Args) -> gradient_mesh::Result<()> {
    let mut renderer = FrameRenderer::new(args.width, args.height);
    let mut scene = Scene::new(args.width, args.height, args.columns, args.rows);
    let fixed_mesh = args.obj.as_deref().map(Mesh::from_obj).transpose()?;

    log::info!(
        "Rendering {} at {}x{}",
        match &args.obj {
            Some(path) => path.display().to_string(),
            None => format!("{} node scene", scene.node_count()),
        },
        args.width,
        args.height
    );

    if let Some(path) = &args.snapshot {
        let mesh = fixed_mesh.unwrap_or_else(|| scene.mesh());
        return renderer.render(mesh.triangles()).save_png(path);
    }

    let mut window = Window::new("Gradient Mesh", args.width, args.height)?;
    let mut limiter = FrameLimiter::new(&window);

    // Draw the first frame before any input arrives
    let mut dirty = true;
    loop {
        match window.poll_events() {
            WindowEvent::Quit => break,
            WindowEvent::PointerMoved(x, y) => scene.set_pointer(x, y),
            WindowEvent::None => {}
        }

        let moved = scene.tick() && fixed_mesh.is_none();
        if moved || dirty {
            let scene_mesh;
            let mesh = match &fixed_mesh {
                Some(mesh) => mesh,
                None => {
                    scene_mesh = scene.mesh();
                    &scene_mesh
                }
            };
            let frame = renderer.render(mesh.triangles());
            window.present(frame.as_bytes())?;
            dirty = false;
        }

        limiter.wait_and_get_delta(&window);
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
