//! Command-line inspector for the uniform data contract.
//!
//! - `layout`: print and validate the byte layout of every uniform struct
//! - `dump`: build `VertexUniforms` for a camera and object pose and print them
//! - `gpu-check`: upload uniforms through a GPU ring and verify the read-back

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use glam::{Mat4, Quat, Vec3};
use vertex_uniforms::{
    gpu::{GpuContext, GpuUniformRing},
    layout::describe,
    ring::DEFAULT_IN_FLIGHT,
    transform::model_matrix,
    Camera, FragmentUniforms, Light, ProjectionConfig, UniformLayout, VertexUniforms,
};

const DEFAULT_ASPECT_RATIO: f32 = 800.0 / 600.0;
const BYTES_PER_HEX_ROW: usize = 16;
const FRAME_ROTATION_STEP: f32 = 0.01;

#[derive(Parser, Debug)]
#[command(name = "uniforms")]
#[command(about = "Inspect and verify the VertexUniforms shader data contract")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the byte layout of every uniform struct
    Layout,
    /// Build VertexUniforms for a camera and object pose
    Dump(DumpArgs),
    /// Round-trip uniforms through GPU buffers
    GpuCheck {
        /// Number of frames to upload
        #[arg(long, default_value = "6")]
        frames: usize,
        /// Slots in the uniform ring
        #[arg(long, default_value_t = DEFAULT_IN_FLIGHT)]
        in_flight: usize,
    },
}

#[derive(clap::Args, Debug)]
struct DumpArgs {
    /// Viewport width / height
    #[arg(long, default_value_t = DEFAULT_ASPECT_RATIO)]
    aspect: f32,

    /// Vertical field of view in degrees
    #[arg(long, default_value = "36")]
    fov_degrees: f32,

    #[arg(long, default_value = "0.1")]
    near: f32,

    #[arg(long, default_value = "160")]
    far: f32,

    /// Object translation
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    translate: Option<Vec<f32>>,

    /// Object rotation about +Y in degrees
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    rotate_y: f32,

    /// Uniform object scale
    #[arg(long, default_value = "1")]
    scale: f32,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::Layout => run_layout(),
        Command::Dump(dump) => run_dump(&dump),
        Command::GpuCheck { frames, in_flight } => {
            pollster::block_on(run_gpu_check(frames, in_flight))
        }
    }
}

fn run_layout() -> Result<()> {
    print_layout::<VertexUniforms>()?;
    print_layout::<Light>()?;
    print_layout::<FragmentUniforms>()?;
    Ok(())
}

fn print_layout<T: UniformLayout>() -> Result<()> {
    print!("{}", describe::<T>());
    T::validate()?;
    println!("  ok\n");
    Ok(())
}

fn run_dump(args: &DumpArgs) -> Result<()> {
    let projection = ProjectionConfig {
        fov_y_radians: args.fov_degrees.to_radians(),
        near: args.near,
        far: args.far,
    };
    projection.validate()?;
    ProjectionConfig::validate_aspect(args.aspect)?;

    let translation = match args.translate.as_deref() {
        Some(&[x, y, z]) => Vec3::new(x, y, z),
        Some(other) => bail!("--translate takes 3 values, got {}", other.len()),
        None => Vec3::ZERO,
    };
    let model = model_matrix(
        translation,
        Quat::from_rotation_y(args.rotate_y.to_radians()),
        Vec3::splat(args.scale),
    );

    let camera = Camera::with_projection(args.aspect, projection);
    let uniforms = camera.vertex_uniforms(model);
    log::debug!("camera eye at {:?}", camera.eye_position());

    print_matrix("model_view_matrix", &uniforms.model_view);
    print_matrix("projection_matrix", &uniforms.projection);
    print_matrix("normal_matrix", &uniforms.normal);
    println!();
    print_hex(uniforms.as_bytes());
    Ok(())
}

async fn run_gpu_check(frames: usize, in_flight: usize) -> Result<()> {
    let gpu = GpuContext::new().await?;
    gpu.validate_shader().await?;

    let mut ring = GpuUniformRing::<VertexUniforms>::new(&gpu, "Vertex Uniforms", in_flight)?;
    let mut camera = Camera::new(DEFAULT_ASPECT_RATIO);

    for frame in 0..frames {
        camera.rotate(FRAME_ROTATION_STEP, 0.0);
        let model = Mat4::from_rotation_y(frame as f32 * FRAME_ROTATION_STEP);
        let uniforms = camera.vertex_uniforms(model);

        let slot = ring.write_next(&gpu, uniforms)?;
        let Some(buffer) = ring.buffer(slot) else {
            bail!("uniform slot {slot} has no buffer");
        };
        let read_back = gpu.read_buffer(buffer).await?;
        if read_back != uniforms.as_bytes() {
            bail!("frame {frame}: slot {slot} read back different bytes");
        }
        // read_buffer waited for the queue, so the slot is free again.
        ring.release();
        println!("frame {frame}: slot {slot} ok ({} bytes)", read_back.len());
    }

    println!("{frames} frames verified across {} slots", ring.capacity());
    Ok(())
}

fn print_matrix<const C: usize>(label: &str, columns: &[[f32; 4]; C]) {
    println!("{label} (columns):");
    for column in columns {
        println!(
            "  [{:9.4} {:9.4} {:9.4} {:9.4}]",
            column[0], column[1], column[2], column[3]
        );
    }
}

fn print_hex(bytes: &[u8]) {
    for (row, chunk) in bytes.chunks(BYTES_PER_HEX_ROW).enumerate() {
        let hex: Vec<String> = chunk.iter().map(|byte| format!("{byte:02x}")).collect();
        println!("{:04x}: {}", row * BYTES_PER_HEX_ROW, hex.join(" "));
    }
}
