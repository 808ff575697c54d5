pub mod radar;
pub mod seismic;
pub mod spectrometer;

pub use radar::RadarEngine;
pub use seismic::SeismicEngine;
pub use spectrometer::SpectrometerEngine;
