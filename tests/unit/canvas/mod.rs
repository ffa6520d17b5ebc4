mod recording;
mod surface;
