//! Generates sphere point sets and orders them into scan tours.

use clap::Parser;
use spheretour::{
    args::{
        CommandTask::{Generate, Tour},
        GenerateCommand, TourArgs, TourCommand,
    },
    generator::GoldenSphere,
    point::{to_spherical, AngularPoint, CartesianPoint},
    point_decoder::parse_lines,
    point_file::{PointFile, TourFile},
    tour::build_tour,
    waypoint::total_steps,
};

use log::{debug, error, info};
use std::{
    error::Error,
    io::{self, Read, Write},
    process::ExitCode,
};

// Example:
// cargo run --bin spheretour -- generate -n 1000 --max 0.75 -o points.ron
// cargo run --bin spheretour -- tour -i points.ron -o tour.ron
// echo "0 0\n1 0.5\n0.2 0.1" | cargo run --bin spheretour -- tour --angular

fn main() -> ExitCode {
    env_logger::init();
    let args = TourArgs::parse();

    let res = match args.command {
        Generate(cmd) => generate(cmd),
        Tour(cmd) => tour(cmd),
    };

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("spheretour: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn generate(cmd: GenerateCommand) -> Result<(), Box<dyn Error>> {
    let points = GoldenSphere::builder()
        .num_points(cmd.num_points)
        .radius(cmd.radius)
        .minimum(cmd.minimum)
        .maximum(cmd.maximum)
        .angle_start(cmd.angle_start)
        .angle_range(cmd.angle_range)
        .build()
        .generate();

    info!("{} points generated", points.len());
    PointFile::new(points).to_path(&cmd.outfile)?;
    debug!("wrote points to {}", cmd.outfile.display());
    Ok(())
}

/// Reads the points named by `cmd` and turns them into angular coordinates.
fn load_angular(cmd: &TourCommand) -> Result<Vec<AngularPoint>, Box<dyn Error>> {
    if cmd.angular {
        return Ok(match &cmd.infile {
            Some(path) => PointFile::<AngularPoint>::from_path(path)?.points,
            None => parse_lines(&read_stdin()?)?,
        });
    }

    let points: Vec<CartesianPoint> = match &cmd.infile {
        Some(path) => PointFile::<CartesianPoint>::from_path(path)?.points,
        None => parse_lines(&read_stdin()?)?,
    };
    let angular = points
        .into_iter()
        .map(|p| to_spherical(p).map(|s| s.angular()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(angular)
}

fn read_stdin() -> io::Result<String> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

fn tour(cmd: TourCommand) -> Result<(), Box<dyn Error>> {
    let points = load_angular(&cmd)?;
    info!("read {} points", points.len());

    let tour = build_tour(&points)?;
    let path_length = tour.path_length(&points);
    info!("tour length is {:.4}", path_length);

    let mut stdout = io::stdout().lock();
    if cmd.waypoints {
        let waypoints = tour.waypoints(&points);
        for waypoint in &waypoints {
            writeln!(stdout, "{} {}", waypoint.pitch, waypoint.yaw)?;
        }
        info!("motors travel {} steps in total", total_steps(&waypoints));
        return Ok(());
    }

    let file = TourFile::new(&tour, path_length);
    match &cmd.outfile {
        Some(path) => file.to_path(path)?,
        None => {
            file.to_writer(&mut stdout)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}
