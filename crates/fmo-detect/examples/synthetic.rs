//! Run the built-in detector on a hand-built synthetic frame and print the
//! result. No video input required.

use fmo_detect::{
    make, Cluster, Config, Dims, FrameCandidates, HalfDims, Output, PixelFormat, Pos, Strip,
    StripArena, StripRef,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmo_detect::core::init_with_level(log::LevelFilter::Debug)?;

    let config = Config::default();
    let dims = Dims {
        width: 320,
        height: 240,
    };
    let mut detector = make(&config, PixelFormat::Gray, dims)?;

    // One candidate resembling a ball moving left to right: the newer
    // difference image covers the left part of the span, the older one the
    // right part.
    let mut arena = StripArena::new();
    let specs: &[(i32, i32, bool, bool)] = &[
        (20, 100, false, true),
        (50, 102, true, true),
        (80, 104, false, true),
        (70, 102, true, false),
        (120, 108, true, false),
    ];
    let mut head = Strip::END;
    let mut prev = Strip::END;
    for &(x, y, older, newer) in specs {
        let index = arena.push(Strip {
            pos: Pos::new(x, y),
            half: HalfDims {
                width: 2,
                height: 4,
            },
            older,
            newer,
            next: Strip::END,
        });
        if prev == Strip::END {
            head = index;
        } else {
            arena.link(prev, index);
        }
        prev = index;
    }
    let cluster = Cluster::new(
        StripRef {
            strip: head,
            pos: Pos::new(20, 100),
        },
        StripRef {
            strip: prev,
            pos: Pos::new(120, 108),
        },
        24.0,
        6.0,
        10.0,
    );

    detector.process_frame(FrameCandidates {
        arena,
        clusters: vec![cluster],
    });

    let mut out = Output::default();
    detector.get_output(&mut out, false);

    match out.detections.first() {
        Some(d) => {
            println!(
                "object at ({}, {}), radius {:.1}, came from ({}, {})",
                d.object.center.x,
                d.object.center.y,
                d.object.radius,
                d.predecessor.center.x,
                d.predecessor.center.y,
            );
            let mut points = Vec::new();
            d.points(&mut points);
            println!("{} member pixels", points.len());
        }
        None => println!("no object in this frame"),
    }

    Ok(())
}
