use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use anyhow::{Context, bail, ensure};
    use clap::{Parser, Subcommand, ValueEnum};
    use impact_algebra::{Complex, Quaternion, random::SplitMix64};
    use nalgebra::{Vector2, Vector3, Vector4};
    use rand::SeedableRng;
    use serde::Deserialize;
    use std::path::{Path, PathBuf};

    #[derive(Debug, Parser)]
    #[command(about = "The Impact complex number and quaternion toolkit", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Rotate a vector with a quaternion built from Euler angles or an
        /// axis and angle
        Rotate {
            /// Vector to rotate, as `x,y,z`
            #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
            vector: Vec<f64>,

            /// Roll, pitch and yaw in radians, as `roll,pitch,yaw`
            #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true, conflicts_with = "axis")]
            euler: Option<Vec<f64>>,

            /// Rotation axis, as `x,y,z` (normalized before use)
            #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true, requires = "angle")]
            axis: Option<Vec<f64>>,

            /// Rotation angle in radians about `axis`
            #[arg(long, allow_hyphen_values = true)]
            angle: Option<f64>,
        },
        /// Print the Euler angles of the rotation given by a quaternion
        Euler {
            /// Quaternion components, as `x,y,z,w` with `x` the real part
            #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
            quaternion: Vec<f64>,
        },
        /// Compute the exponential of a complex number (two components) or a
        /// quaternion (four components)
        Exp {
            /// Components, real part first
            #[arg(value_delimiter = ',', allow_hyphen_values = true)]
            components: Vec<f64>,
        },
        /// Draw random unit quaternions
        Sample {
            /// Path to RON file with the sampling configuration
            #[arg(short, long)]
            config: Option<PathBuf>,

            /// Number of quaternions to draw (overrides the configuration)
            #[arg(short = 'n', long)]
            count: Option<usize>,

            /// Seed for the random number generator (overrides the
            /// configuration)
            #[arg(short, long)]
            seed: Option<u64>,

            /// Sampling method (overrides the configuration)
            #[arg(short, long, value_enum)]
            method: Option<SamplingMethod>,
        },
    }

    /// Configuration for the `sample` subcommand.
    #[derive(Clone, Debug, Deserialize)]
    #[serde(default, deny_unknown_fields)]
    struct SamplingConfig {
        count: usize,
        seed: u64,
        method: SamplingMethod,
    }

    #[derive(Clone, Copy, Debug, Deserialize, ValueEnum)]
    enum SamplingMethod {
        /// Rejection sampling of uniformly distributed rotations
        Rotation,
        /// Normalized components drawn from `[0, 1)`
        Unit,
    }

    impl Default for SamplingConfig {
        fn default() -> Self {
            Self {
                count: 10,
                seed: 0,
                method: SamplingMethod::Rotation,
            }
        }
    }

    impl SamplingConfig {
        fn from_ron_file(file_path: &Path) -> Result<Self> {
            let text = std::fs::read_to_string(file_path)
                .with_context(|| format!("Could not open {}", file_path.display()))?;

            Self::from_ron_str(&text)
                .with_context(|| format!("Invalid syntax in {}", file_path.display()))
        }

        fn from_ron_str(text: &str) -> Result<Self> {
            ron::from_str(text).map_err(anyhow::Error::from)
        }
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();

        match cli.command {
            Command::Rotate {
                vector,
                euler,
                axis,
                angle,
            } => rotate(&vector, euler.as_deref(), axis.as_deref(), angle),
            Command::Euler { quaternion } => euler_angles(&quaternion),
            Command::Exp { components } => exp(&components),
            Command::Sample {
                config,
                count,
                seed,
                method,
            } => {
                let mut sampling_config = match config {
                    Some(path) => SamplingConfig::from_ron_file(&path)?,
                    None => SamplingConfig::default(),
                };
                if let Some(count) = count {
                    sampling_config.count = count;
                }
                if let Some(seed) = seed {
                    sampling_config.seed = seed;
                }
                if let Some(method) = method {
                    sampling_config.method = method;
                }
                sample(&sampling_config);
                Ok(())
            }
        }
    }

    fn rotate(
        vector: &[f64],
        euler: Option<&[f64]>,
        axis: Option<&[f64]>,
        angle: Option<f64>,
    ) -> Result<()> {
        let vector = vector3_from_slice(vector, "vector")?;

        let rotation = match (euler, axis, angle) {
            (Some(euler), _, _) => {
                Quaternion::from_euler_angles(&vector3_from_slice(euler, "Euler angles")?)
            }
            (None, Some(axis), Some(angle)) => {
                let axis = vector3_from_slice(axis, "axis")?;
                let norm = axis.norm();
                ensure!(norm > 0.0, "Rotation axis must be nonzero");
                Quaternion::from_axis_angle(&(axis / norm), angle)
            }
            _ => bail!("Specify either `--euler` or both `--axis` and `--angle`"),
        };
        log::debug!("Rotation quaternion: {rotation}");

        let rotated = rotation.rotate_vector(&vector);
        println!("quaternion: {rotation}");
        println!(
            "rotated:    ({:.6}, {:.6}, {:.6})",
            rotated.x, rotated.y, rotated.z
        );
        println!("matrix:{}", rotation.to_rotation_matrix());
        Ok(())
    }

    fn euler_angles(components: &[f64]) -> Result<()> {
        let quaternion = Quaternion::from_vector(&vector4_from_slice(components, "quaternion")?);
        let rotation = quaternion
            .try_normalized()
            .context("Quaternion must be nonzero to represent a rotation")?;

        if quaternion.norm() != 1.0 {
            log::info!("Normalized quaternion to {rotation}");
        }

        let angles = rotation.euler_angles();
        println!(
            "roll: {:.6}, pitch: {:.6}, yaw: {:.6}",
            angles.x, angles.y, angles.z
        );
        Ok(())
    }

    fn exp(components: &[f64]) -> Result<()> {
        match *components {
            [x, y] => {
                let number = Complex::from_vector(&Vector2::new(x, y));
                println!("exp({number}) = {}", number.exp());
            }
            [x, y, z, w] => {
                let quaternion = Quaternion::from_vector(&Vector4::new(x, y, z, w));
                println!("exp({quaternion}) = {}", quaternion.exp());
            }
            _ => bail!(
                "Expected 2 (complex) or 4 (quaternion) components, got {}",
                components.len()
            ),
        }
        Ok(())
    }

    fn sample(config: &SamplingConfig) {
        log::info!(
            "Drawing {} quaternions with {:?} sampling (seed {})",
            config.count,
            config.method,
            config.seed
        );

        let mut rng = SplitMix64::seed_from_u64(config.seed);

        for _ in 0..config.count {
            let quaternion: Quaternion<f64> = match config.method {
                SamplingMethod::Rotation => Quaternion::random_rotation(&mut rng),
                SamplingMethod::Unit => Quaternion::random_unit(&mut rng),
            };
            println!("{quaternion}");
        }
    }

    fn vector3_from_slice(components: &[f64], name: &str) -> Result<Vector3<f64>> {
        ensure!(
            components.len() == 3,
            "Expected 3 components for {name}, got {}",
            components.len()
        );
        Ok(Vector3::from_column_slice(components))
    }

    fn vector4_from_slice(components: &[f64], name: &str) -> Result<Vector4<f64>> {
        ensure!(
            components.len() == 4,
            "Expected 4 components for {name}, got {}",
            components.len()
        );
        Ok(Vector4::from_column_slice(components))
    }

}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
