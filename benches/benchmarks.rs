criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        blending_translucent_icon,
        rendering_history_strip,
        compositing_idle_frame,
        resolving_full_match,
}

fn blending_translucent_icon(c: &mut criterion::Criterion) {
    let icon = Icon::Translucent(RgbaImage::from_pixel(ICON_SIZE, ICON_SIZE, Rgba([200, 10, 10, 128])));
    let mut frame = Frame::new(640, 480);
    c.bench_function("blend a translucent icon", |b| {
        b.iter(|| blend(&mut frame, &icon, 150, 398))
    });
}

fn rendering_history_strip(c: &mut criterion::Criterion) {
    let icons = icons();
    let typeface = Typeface::bundled().unwrap();
    let history = [Choice::Rock, Choice::Paper, Choice::Scissors];
    let mut frame = Frame::new(640, 480);
    c.bench_function("render a full history strip", |b| {
        b.iter(|| render_history(&mut frame, &typeface, "Player", &history, 420, &icons, TOTAL_ROUNDS))
    });
}

fn compositing_idle_frame(c: &mut criterion::Criterion) {
    let hud = Hud::new(icons(), Typeface::bundled().unwrap());
    let mut state = MatchState::default();
    state.apply(Choice::Rock, Choice::Paper).unwrap();
    state.apply(Choice::Scissors, Choice::Paper).unwrap();
    let frame = Frame::new(640, 480);
    let view = View {
        region: Region::within(&frame, ROI_SIZE),
        state: Some(&state),
        last: None,
        notice: None,
    };
    c.bench_function("composite an idle 640x480 frame", |b| {
        b.iter(|| {
            let mut frame = frame.clone();
            hud.idle(&mut frame, &view);
            frame
        })
    });
}

fn resolving_full_match(c: &mut criterion::Criterion) {
    c.bench_function("play a random match to its verdict", |b| {
        b.iter(|| {
            let mut state = MatchState::default();
            while !state.is_over() {
                state.apply(Choice::random(), Choice::random()).unwrap();
            }
            state.verdict()
        })
    });
}

fn icons() -> IconCache {
    Choice::all().into_iter().fold(IconCache::default(), |cache, choice| {
        let shade = choice as u8 * 80;
        let icon = RgbaImage::from_pixel(ICON_SIZE, ICON_SIZE, Rgba([shade, 255 - shade, 0, 200]));
        cache.with(choice, Icon::Translucent(icon))
    })
}

use image::Rgba;
use image::RgbaImage;
use roshambo::Arbitrary;
use roshambo::ICON_SIZE;
use roshambo::ROI_SIZE;
use roshambo::TOTAL_ROUNDS;
use roshambo::capture::Region;
use roshambo::game::MatchState;
use roshambo::gesture::Choice;
use roshambo::render::*;
