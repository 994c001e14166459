use log::debug;

use crate::constants::{
    BULLET_SPEED, GOPHER_SPRITE_HEIGHT, GOPHER_SPRITE_WIDTH, MAX_BULLET_COUNT, SCREEN_WIDTH,
};

/// One slot of the bullet pool.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bullet {
    pub use_flag: bool,
    pub live_flag: bool,
    /// Never raised anywhere, so the speed guard in [`Bullet::advance`] stays open.
    pub speed_flag: bool,
    pub speed: f32,
    /// Distance travelled from the gopher. The screen-exit check reads it as
    /// a screen x.
    pub pos_x: f32,
    pub pos_y: f32,
    pub shot_pos_x: f64,
    /// Gopher `y16` at the moment of firing.
    pub shot_pos_y: f64,
}

impl Bullet {
    /// State of a slot in a new pool, before any clear.
    pub const UNFIRED: Bullet = Bullet {
        use_flag: false,
        live_flag: false,
        speed_flag: false,
        speed: 0.0,
        pos_x: 0.0,
        pos_y: 0.0,
        shot_pos_x: 0.0,
        shot_pos_y: 0.0,
    };

    /// State of every slot after a pool clear. The position restarts at the
    /// gopher sprite's size.
    pub const CLEARED: Bullet = Bullet {
        use_flag: false,
        live_flag: false,
        speed_flag: false,
        speed: 0.0,
        pos_x: GOPHER_SPRITE_WIDTH as f32,
        pos_y: GOPHER_SPRITE_HEIGHT as f32,
        shot_pos_x: 0.0,
        shot_pos_y: 0.0,
    };

    fn advance(&mut self) {
        if !self.speed_flag && self.live_flag {
            self.speed += BULLET_SPEED;
        }
        self.pos_x += BULLET_SPEED;
    }

    /// The right edge is measured with the gopher sprite's width, not the
    /// bullet's.
    fn is_off_screen(&self) -> bool {
        self.pos_x as i64 + GOPHER_SPRITE_WIDTH > SCREEN_WIDTH
    }
}

impl Default for Bullet {
    fn default() -> Self {
        Self::UNFIRED
    }
}

/// Fixed-capacity bullet arena.
///
/// `count` is both the number of shots since the last reload and the index
/// of the newest slot, so slot 0 is never fired and `MAX_BULLET_COUNT - 1`
/// slots are usable.
#[derive(Clone, Debug)]
pub struct BulletPool {
    slots: [Bullet; MAX_BULLET_COUNT],
    count: usize,
}

impl Default for BulletPool {
    fn default() -> Self {
        Self::new()
    }
}

impl BulletPool {
    pub fn new() -> Self {
        Self {
            slots: [Bullet::UNFIRED; MAX_BULLET_COUNT],
            count: 0,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn slots(&self) -> &[Bullet] {
        &self.slots
    }

    /// Slots currently flying across the screen.
    pub fn in_flight(&self) -> impl Iterator<Item = &Bullet> + '_ {
        self.slots.iter().filter(|b| b.use_flag)
    }

    /// Fires when `requested`; see [`BulletPool::fire`].
    pub fn fire_if_requested(&mut self, requested: bool, y16: i64) -> Option<usize> {
        if requested { self.fire(y16) } else { None }
    }

    /// Claims the next slot for a shot taken at gopher height `y16` and
    /// returns its index. A full pool reloads: the count starts over and the
    /// shot lands in slot 1.
    pub fn fire(&mut self, y16: i64) -> Option<usize> {
        if self.count + 1 < MAX_BULLET_COUNT {
            self.count += 1;
        } else if self.count + 1 == MAX_BULLET_COUNT {
            debug!("bullet pool exhausted after {} shots, reloading", self.count);
            self.count = 1;
        } else {
            return None;
        }

        // Every shot restarts the acceleration of the whole volley so far.
        for slot in &mut self.slots[..=self.count] {
            slot.speed = 0.0;
        }

        let slot = &mut self.slots[self.count];
        slot.shot_pos_y = y16 as f64;
        slot.live_flag = true;
        slot.use_flag = true;
        Some(self.count)
    }

    /// Moves every bullet in flight one step. As soon as one live bullet
    /// leaves the screen the whole pool is cleared; returns whether that
    /// happened.
    pub fn advance(&mut self) -> bool {
        for i in 0..self.slots.len() {
            let slot = &mut self.slots[i];
            if !slot.use_flag {
                continue;
            }
            slot.advance();
            if slot.live_flag && slot.is_off_screen() {
                debug!("bullet in slot {i} left the screen, clearing pool");
                self.clear_all();
                return true;
            }
        }
        false
    }

    /// Resets every slot. The shot count is left as is.
    pub fn clear_all(&mut self) {
        self.slots.fill(Bullet::CLEARED);
    }
}
