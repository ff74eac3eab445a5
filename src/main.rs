use tracing_subscriber::EnvFilter;
use world2geojson_wasm::model::{Coordinate, LineSegment, Track, Waypoint};
use world2geojson_wasm::world::World;

fn sample_world() -> World {
    let home = Waypoint::new(Coordinate::with_elevation(-121.5, 45.5, 30.0))
        .with_name("home")
        .with_icon("flag");
    let store = Waypoint::new(Coordinate::new(-121.5, 45.6))
        .with_name("store")
        .with_icon("dot");

    let segment1 = LineSegment::new(vec![
        Coordinate::new(-122.0, 45.0),
        Coordinate::new(-122.0, 46.0),
        Coordinate::new(-121.0, 46.0),
    ]);
    let segment2 = LineSegment::new(vec![
        Coordinate::new(-121.0, 45.0),
        Coordinate::new(-121.0, 46.0),
    ]);
    let segment3 = LineSegment::new(vec![
        Coordinate::new(-121.0, 45.5),
        Coordinate::new(-122.0, 45.5),
    ]);

    let track1 = Track::new(vec![segment1, segment2]).with_name("track 1");
    let track2 = Track::new(vec![segment3]).with_name("track 2");

    World::new(
        "My Data",
        vec![
            Box::new(home),
            Box::new(store),
            Box::new(track1),
            Box::new(track2),
        ],
    )
}

fn main() {
    // Logs go to stderr so stdout only carries the document.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let world = sample_world();
    println!("{}", world.to_geojson());
}
