use reel_api::prelude::*;

/// Every video the server knows about, in insertion order.
///
/// The store assumes it is the only writer; the server keeps it behind a
/// single lock in `ReelState`.
#[derive(Clone, Debug, Default)]
pub struct VideoStore {
    videos: Vec<Video>,
    last_id: u64,
}

impl VideoStore {
    /// A store holding only the seed record.
    pub fn seeded() -> Self {
        let seed = Video::seed();
        Self {
            last_id: seed.id,
            videos: vec![seed],
        }
    }

    /// Ids are never reused, even after `clear`.
    pub fn next_id(&mut self) -> u64 {
        self.last_id += 1;
        self.last_id
    }

    pub fn list(&self) -> &[Video] {
        &self.videos
    }

    pub fn get_by_id(&self, id: u64) -> Option<&Video> {
        self.videos.iter().find(|video| video.id == id)
    }

    pub fn insert(&mut self, video: Video) {
        #[cfg(debug_assertions)]
        if self.get_by_id(video.id).is_some() {
            panic!("inserting video id {} that already exists in VideoStore", video.id);
        }
        self.last_id = self.last_id.max(video.id);
        self.videos.push(video);
    }

    pub fn remove_by_id(&mut self, id: u64) -> Option<Video> {
        let index = self.videos.iter().position(|video| video.id == id)?;
        Some(self.videos.remove(index))
    }

    pub fn clear(&mut self) {
        self.videos.clear();
    }

    pub fn update_by_id(&mut self, id: u64, patch: VideoPatch) -> Option<&Video> {
        let video = self.videos.iter_mut().find(|video| video.id == id)?;
        video.apply(patch);
        Some(video)
    }
}
