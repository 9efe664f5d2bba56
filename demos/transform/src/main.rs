use argh::FromArgs;
use std::{path::PathBuf, str::FromStr};

use geowarp::image::{Image, ImageSize};
use geowarp::imgproc::warp::{self, ReflectionAxis, TransformKind};
use geowarp::io::functional as F;

#[derive(Debug, Clone, Copy, PartialEq)]
enum KindArg {
    Translation,
    Scaling,
    Rotation,
    Shear,
    Reflection,
}

impl FromStr for KindArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "translation" => Ok(KindArg::Translation),
            "scaling" => Ok(KindArg::Scaling),
            "rotation" => Ok(KindArg::Rotation),
            "shear" => Ok(KindArg::Shear),
            "reflection" => Ok(KindArg::Reflection),
            other => Err(format!(
                "unknown transform `{other}`, expected one of translation, scaling, rotation, shear, reflection"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct AxisArg(ReflectionAxis);

impl FromStr for AxisArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" => Ok(AxisArg(ReflectionAxis::Horizontal)),
            "vertical" => Ok(AxisArg(ReflectionAxis::Vertical)),
            "diagonal" => Ok(AxisArg(ReflectionAxis::Diagonal)),
            other => Err(format!(
                "unknown axis `{other}`, expected horizontal, vertical or diagonal"
            )),
        }
    }
}

#[derive(FromArgs)]
/// Translate, scale, rotate, shear or reflect an image.
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// path to the output image, .png or .jpg
    #[argh(option, short = 'o')]
    output: PathBuf,

    /// the transform to apply: translation, scaling, rotation, shear or reflection
    #[argh(option, short = 'k')]
    kind: Option<KindArg>,

    /// horizontal translation in pixels
    #[argh(option, default = "0.0")]
    dx: f32,

    /// vertical translation in pixels
    #[argh(option, default = "0.0")]
    dy: f32,

    /// horizontal scale factor
    #[argh(option, default = "1.0")]
    sx: f32,

    /// vertical scale factor
    #[argh(option, default = "1.0")]
    sy: f32,

    /// rotation angle in degrees
    #[argh(option, default = "0.0")]
    angle: f32,

    /// horizontal shear factor
    #[argh(option, default = "0.0")]
    shx: f32,

    /// vertical shear factor
    #[argh(option, default = "0.0")]
    shy: f32,

    /// reflection axis: horizontal, vertical or diagonal
    #[argh(option, default = "AxisArg(ReflectionAxis::Horizontal)")]
    axis: AxisArg,

    /// json file with a list of transforms applied in order
    #[argh(option, short = 'c')]
    config: Option<PathBuf>,
}

/// Parameter ranges offered by the interactive controls.
const TRANSLATION_RANGE: (f32, f32) = (-200.0, 200.0);
const SCALE_RANGE: (f32, f32) = (0.1, 3.0);
const ANGLE_RANGE: (f32, f32) = (-180.0, 180.0);
const SHEAR_RANGE: (f32, f32) = (-1.0, 1.0);

fn kind_from_args(args: &Args) -> Result<TransformKind, Box<dyn std::error::Error>> {
    let Some(kind) = args.kind else {
        return Err("either --kind or --config is required".into());
    };

    Ok(match kind {
        KindArg::Translation => TransformKind::Translation {
            dx: args.dx,
            dy: args.dy,
        },
        KindArg::Scaling => TransformKind::Scaling {
            sx: args.sx,
            sy: args.sy,
        },
        KindArg::Rotation => TransformKind::Rotation {
            angle_degrees: args.angle,
            center: None,
        },
        KindArg::Shear => TransformKind::Shear {
            shx: args.shx,
            shy: args.shy,
        },
        KindArg::Reflection => TransformKind::Reflection { axis: args.axis.0 },
    })
}

fn warn_outside(name: &str, value: f32, (lo, hi): (f32, f32)) {
    if !(lo..=hi).contains(&value) {
        log::warn!("{name} = {value} is outside of the usual range [{lo}, {hi}]");
    }
}

fn warn_unusual(kind: &TransformKind) {
    match *kind {
        TransformKind::Translation { dx, dy } => {
            warn_outside("dx", dx, TRANSLATION_RANGE);
            warn_outside("dy", dy, TRANSLATION_RANGE);
        }
        TransformKind::Scaling { sx, sy } => {
            warn_outside("sx", sx, SCALE_RANGE);
            warn_outside("sy", sy, SCALE_RANGE);
        }
        TransformKind::Rotation { angle_degrees, .. } => {
            warn_outside("angle", angle_degrees, ANGLE_RANGE);
        }
        TransformKind::Shear { shx, shy } => {
            warn_outside("shx", shx, SHEAR_RANGE);
            warn_outside("shy", shy, SHEAR_RANGE);
        }
        TransformKind::Reflection { .. } => {}
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    let kinds: Vec<TransformKind> = match &args.config {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => vec![kind_from_args(&args)?],
    };

    // read the image
    let image: Image<u8, 3> = F::read_image_any_rgb8(&args.image_path)?;
    log::info!("loaded {} ({})", args.image_path.display(), image.size());

    // each transform sees the grid produced by the previous one
    let mut matrices = Vec::with_capacity(kinds.len());
    let mut size: ImageSize = image.size();
    for kind in &kinds {
        warn_unusual(kind);
        matrices.push(warp::build_matrix(kind, size)?);
        size = warp::output_size(kind, size);
    }

    let m = warp::compose(&matrices);
    log::info!("applying {m} into a {size} grid");

    let output = warp::apply_transform(&image, &m, size)?;

    F::write_image_any_rgb8(&args.output, &output)?;
    log::info!("saved {}", args.output.display());

    Ok(())
}
