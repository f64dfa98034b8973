//! Background music. Lives entirely outside the game rules: the game never asks about it.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};
use rodio::{Decoder, OutputStream, Sink};


pub struct Music
{
    _stream: OutputStream,    // Playback stops when this is dropped.
    sink: Sink,
    track: PathBuf,
    broken: bool              // Set once the track fails to decode, so we stop retrying.
}


impl Music
{
    /// Opens the default audio device and checks that `track` can be decoded.
    pub fn open(track: &Path, volume: f32) -> Result<Self>
    {
        let (stream, stream_handle) = OutputStream::try_default().context("no audio output device")?;
        let sink = Sink::try_new(&stream_handle).context("could not create an audio sink")?;
        sink.set_volume(volume);

        let music = Music { _stream: stream, sink, track: track.to_path_buf(), broken: false };
        music.decode()?;
        info!("music: {}", track.display());

        Ok(music)
    }

    fn decode(&self) -> Result<Decoder<BufReader<File>>>
    {
        let file = File::open(&self.track).with_context(|| format!("could not open {}", self.track.display()))?;
        let source = Decoder::new(BufReader::new(file)).with_context(|| format!("could not decode {}", self.track.display()))?;
        Ok(source)
    }

    /// Queues the track again whenever it has run out. Call once per update.
    pub fn keep_playing(&mut self)
    {
        if self.broken || self.sink.is_paused() || !self.sink.empty() { return; }

        match self.decode()
        {
            Ok(source) => {
                self.sink.append(source);
                self.sink.play();
            }
            Err(err) => {
                warn!("music disabled: {:#}", err);
                self.broken = true;
            }
        }
    }

    /// Play/pause button.
    pub fn toggle(&mut self)
    {
        if self.sink.is_paused() { self.sink.play(); } else { self.sink.pause(); }
    }

    pub fn stop(&mut self)
    {
        self.sink.stop();
    }
}
