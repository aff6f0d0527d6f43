extern crate mandelbrot;
extern crate rand;
extern crate tempfile;

use mandelbrot::{
    escape_time, evaluate, ppm, Bailout, Config, Gradient, Pixel, Renderer, Schedule,
    MAX_ITERATIONS,
};
use rand::Rng;
use std::fs;
use std::io::Read;

#[test]
fn evaluation_is_deterministic_across_the_view() {
    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        let re = rng.gen_range(-2.0, 1.0);
        let im = rng.gen_range(-1.0, 1.0);
        let first = evaluate(re, im);
        assert_eq!(first, evaluate(re, im));
        assert!(first <= MAX_ITERATIONS);
    }
}

#[test]
fn schedules_agree_on_random_grids() {
    let mut rng = rand::thread_rng();
    for _ in 0..8 {
        let width = rng.gen_range(1, 48);
        let height = rng.gen_range(1, 36);
        let threads = rng.gen_range(1, 9);
        let config = Config {
            threads,
            ..Config::with_size(width, height)
        };
        let renderer = Renderer::new(&config).unwrap();
        assert_eq!(
            renderer.render_parallel(threads).unwrap(),
            renderer.render_sequential(),
            "{}x{} with {} threads",
            width,
            height,
            threads
        );
    }
}

#[test]
fn inside_pixels_are_black_and_outside_pixels_are_not() {
    let renderer = Renderer::new(&Config::with_size(60, 40)).unwrap();
    let image = renderer.render_sequential();
    for y in 0..40 {
        for x in 0..60 {
            let pixel = Pixel(x, y);
            let c = renderer.plane().pixel_to_point(&pixel);
            let offset = renderer.plane().offset(&pixel);
            let rgb = &image[offset..offset + 3];
            if evaluate(c.re, c.im) == MAX_ITERATIONS {
                assert_eq!(rgb, &[0, 0, 0]);
            } else {
                assert!(rgb[0] >= 140 && rgb[0] <= 194);
                assert!(rgb[1] >= 10 && rgb[1] <= 252);
                assert!(rgb[2] >= 196 && rgb[2] <= 199);
            }
        }
    }
}

#[test]
fn iteration_limit_reaches_every_pixel() {
    let config = Config {
        max_iterations: 20,
        threads: 3,
        ..Config::with_size(30, 20)
    };
    let renderer = Renderer::new(&config).unwrap();
    let sequential = renderer.render_sequential();
    assert_eq!(renderer.render_parallel(3).unwrap(), sequential);

    let gradient = Gradient::default();
    let mut inside = 0;
    for y in 0..20 {
        for x in 0..30 {
            let pixel = Pixel(x, y);
            let c = renderer.plane().pixel_to_point(&pixel);
            let iterations = escape_time(c, 20, Bailout::Modulus);
            if iterations == 20 {
                inside += 1;
            }
            let offset = renderer.plane().offset(&pixel);
            assert_eq!(
                &sequential[offset..offset + 3],
                &gradient.color(iterations, 20),
                "pixel {:?}",
                pixel
            );
        }
    }
    assert!(inside > 0);

    // The limit also rescales the gradient.
    let stock = Renderer::new(&Config::with_size(30, 20))
        .unwrap()
        .render_sequential();
    assert!(stock != sequential);
}

#[test]
fn bailouts_render_the_same_image() {
    let modulus = Config {
        bailout: Bailout::Modulus,
        ..Config::with_size(40, 30)
    };
    let squared = Config {
        bailout: Bailout::NormSqr,
        ..Config::with_size(40, 30)
    };
    let modulus = Renderer::new(&modulus).unwrap();
    let squared = Renderer::new(&squared).unwrap();
    assert_eq!(modulus.render_sequential(), squared.render_sequential());
    assert_eq!(squared.render_parallel(4).unwrap(), squared.render_sequential());
}

#[test]
fn written_file_is_header_plus_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("small.ppm");
    let config = Config::with_size(16, 12);
    let pixels = Renderer::new(&config).unwrap().render().unwrap();
    ppm::save(&path, 16, 12, &pixels).unwrap();

    let mut written = Vec::new();
    fs::File::open(&path)
        .unwrap()
        .read_to_end(&mut written)
        .unwrap();
    assert_eq!(written.len(), ppm::file_len(16, 12));
    assert!(written.starts_with(b"P6\n16 12\n255\n"));
    assert_eq!(&written[ppm::header_len(16, 12)..], &pixels[..]);
}

#[test]
fn streamed_file_matches_the_buffered_one() {
    let dir = tempfile::tempdir().unwrap();
    let streamed = dir.path().join("streamed.ppm");
    let buffered = dir.path().join("buffered.ppm");
    let config = Config {
        schedule: Schedule::Sequential,
        ..Config::with_size(20, 10)
    };
    let renderer = Renderer::new(&config).unwrap();

    {
        let mut out = ppm::create(&streamed).unwrap();
        ppm::write_header(&mut out, 20, 10).unwrap();
        renderer.stream(&mut out, &mut ()).unwrap();
    }
    ppm::save(&buffered, 20, 10, &renderer.render_parallel(4).unwrap()).unwrap();

    assert_eq!(fs::read(&streamed).unwrap(), fs::read(&buffered).unwrap());
}

#[test]
fn other_extensions_go_through_the_image_crate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("small.png");
    let pixels = Renderer::new(&Config::with_size(8, 6))
        .unwrap()
        .render()
        .unwrap();
    ppm::save(&path, 8, 6, &pixels).unwrap();
    let written = fs::read(&path).unwrap();
    assert!(written.starts_with(b"\x89PNG"));
}

#[test]
fn unwritable_output_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.ppm");
    assert!(ppm::save(&path, 1, 1, &[0, 0, 0]).is_err());
}
