// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zonepick-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zonepick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Looks ids up, resolves them to tiles and steps those tiles on one ladder.
struct Placer<'a> {
    grid: &'a mut FloorGrid,
    locations: &'a LocationTable,
    zones: &'a ZoneTable,
    stats: &'a mut FrameStats,
}

impl Placer<'_> {
    fn advance_all(&mut self, ids: &[ShipmentId], step: fn(TileCode) -> TileCode) {
        for &id in ids {
            if let Some(pos) = self.place(id) {
                self.grid.update(pos, step);
            }
        }
    }

    fn place(&mut self, id: ShipmentId) -> Option<TilePos> {
        let Some(location) = self.locations.get(id) else {
            // Ids of the other floor are expected here; each floor only knows its own shipments.
            debug!(%id, "shipment not in this floor's location table");
            self.stats.skipped_missing += 1;
            return None;
        };

        let pos = match self.zones.resolve(location) {
            Ok(pos) => pos,
            Err(err) => {
                debug!(%id, %err, "skipping shipment with unplaceable location");
                self.stats.skipped_unresolved += 1;
                return None;
            }
        };

        if !self.grid.contains(pos) {
            debug!(
                %id,
                %location,
                %pos,
                width = self.grid.width(),
                height = self.grid.height(),
                "skipping shipment placed outside the floor grid"
            );
            self.stats.skipped_unresolved += 1;
            return None;
        }
        Some(pos)
    }
}
