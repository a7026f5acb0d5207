//! Commandline argument parser using clap for the spheretour binary

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[allow(missing_docs)]
#[derive(Debug, Parser, Clone)]
#[clap(version, about)]
pub struct TourArgs {
    #[command(subcommand, long_about)]
    /// Which task to perform, generating points or ordering them
    pub command: CommandTask,
}

#[allow(missing_docs)]
#[derive(Debug, Subcommand, Clone)]
pub enum CommandTask {
    /// Generate points spread over a sphere with the golden angle spiral
    #[command(about)]
    Generate(GenerateCommand),

    /// Order a set of points into a greedy nearest neighbour tour
    #[command(about)]
    Tour(TourCommand),
}

#[allow(missing_docs)]
#[derive(Debug, Args, Clone)]
#[command(version, about)]
pub struct GenerateCommand {
    /// Number of points to generate
    #[arg(short = 'n', long = "num")]
    pub num_points: usize,

    /// Radius of the sphere
    #[arg(short = 'r', long, default_value_t = 1.0)]
    pub radius: f64,

    /// Bottom of the band, as a fraction of the sphere's height
    #[arg(long = "min", default_value_t = 0.0)]
    pub minimum: f64,

    /// Top of the band, as a fraction of the sphere's height
    #[arg(long = "max", default_value_t = 1.0)]
    pub maximum: f64,

    /// Start of the horizontal window, in degrees
    #[arg(long, default_value_t = 0.0)]
    pub angle_start: f64,

    /// Width of the horizontal window, in degrees
    #[arg(long, default_value_t = 360.0)]
    pub angle_range: f64,

    /// Filename for the generated points to be written to
    #[arg(short = 'o', long = "out")]
    pub outfile: PathBuf,
}

#[allow(missing_docs)]
#[derive(Debug, Args, Clone)]
#[command(version, about)]
pub struct TourCommand {
    /// RON point file to read, if not given points are read from stdin
    /// one per line
    #[arg(short = 'i', long = "input")]
    pub infile: Option<PathBuf>,

    /// Treat the input as `phi theta` pairs instead of `x y z` points
    #[arg(short, long)]
    pub angular: bool,

    /// Filename for the tour to be written to, stdout if not given
    #[arg(short = 'o', long = "out")]
    pub outfile: Option<PathBuf>,

    /// Print motor waypoints in visiting order instead of the tour
    #[arg(short, long, conflicts_with = "outfile")]
    pub waypoints: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_defaults() {
        let args = TourArgs::parse_from(["spheretour", "generate", "-n", "10", "-o", "p.ron"]);
        let CommandTask::Generate(cmd) = args.command else {
            panic!("expected generate");
        };
        assert_eq!(cmd.num_points, 10);
        assert_eq!(cmd.radius, 1.0);
        assert_eq!(cmd.angle_range, 360.0);
        assert_eq!(cmd.outfile, PathBuf::from("p.ron"));
    }

    #[test]
    fn tour_flags() {
        let args = TourArgs::parse_from(["spheretour", "tour", "--angular", "-w"]);
        let CommandTask::Tour(cmd) = args.command else {
            panic!("expected tour");
        };
        assert!(cmd.angular);
        assert!(cmd.waypoints);
        assert!(cmd.infile.is_none());
        assert!(cmd.outfile.is_none());
    }

    #[test]
    fn waypoints_and_outfile_conflict() {
        let res = TourArgs::try_parse_from(["spheretour", "tour", "-w", "-o", "t.ron"]);
        assert_eq!(
            res.unwrap_err().kind(),
            clap::error::ErrorKind::ArgumentConflict
        );
    }

    #[test]
    fn generate_needs_count() {
        assert!(TourArgs::try_parse_from(["spheretour", "generate", "-o", "p.ron"]).is_err());
    }
}
