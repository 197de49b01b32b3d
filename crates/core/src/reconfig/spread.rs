//! Fire size and spotting procedures

use super::Reconfig;
use crate::config::Prop;
use crate::function::FunId;
use crate::variable::VarId;

const SIZE_NODES: &[FunId] = &[
    FunId::SurfaceFireArea,
    FunId::SurfaceFireDistAtBack,
    FunId::SurfaceFireDistAtHead,
    FunId::SurfaceFireEccentricity,
    FunId::SurfaceFireLengDist,
    FunId::SurfaceFireLengMapDist,
    FunId::SurfaceFireLengthToWidth,
    FunId::SurfaceFireMapDistAtBack,
    FunId::SurfaceFireMapDistAtHead,
    FunId::SurfaceFirePerimeter,
    FunId::SurfaceFireShapeDiagram,
    FunId::SurfaceFireSpreadAtBack,
    FunId::SurfaceFireWidthDist,
    FunId::SurfaceFireWidthMapDist,
];

const SIZE_OUTPUTS: &[(VarId, Prop)] = &[
    (VarId::SurfaceFireArea, Prop::SizeCalcFireArea),
    (VarId::SurfaceFireDistAtBack, Prop::SizeCalcFireDistAtBack),
    (VarId::SurfaceFireDistAtHead, Prop::SizeCalcFireDistAtFront),
    (VarId::SurfaceFireLengthToWidth, Prop::SizeCalcFireLengToWidth),
    (VarId::SurfaceFireLengDist, Prop::SizeCalcFireLengDist),
    (VarId::SurfaceFirePerimeter, Prop::SizeCalcFirePerimeter),
    (VarId::SurfaceFireWidthDist, Prop::SizeCalcFireWidthDist),
    (VarId::SurfaceFireShapeDiagram, Prop::SizeCalcFireShapeDiagram),
];

const SIZE_MAP_OUTPUTS: &[(VarId, Prop)] = &[
    (VarId::SurfaceFireMapDistAtBack, Prop::SizeCalcFireDistAtBack),
    (VarId::SurfaceFireMapDistAtHead, Prop::SizeCalcFireDistAtFront),
    (VarId::SurfaceFireLengMapDist, Prop::SizeCalcFireLengDist),
    (VarId::SurfaceFireWidthMapDist, Prop::SizeCalcFireWidthDist),
];

const SPOT_OUTPUTS: &[(VarId, Prop)] = &[
    (VarId::SpotDistBurningPile, Prop::SpotCalcDistBurningPile),
    (VarId::SpotCoverHtBurningPile, Prop::SpotCalcCoverHtBurningPile),
    (VarId::SpotFirebrandHtBurningPile, Prop::SpotCalcFirebrandHtBurningPile),
    (VarId::SpotFlatDistBurningPile, Prop::SpotCalcFlatDistBurningPile),
    (VarId::SpotDistSurfaceFire, Prop::SpotCalcDistSurfaceFire),
    (VarId::SpotCoverHtSurfaceFire, Prop::SpotCalcCoverHtSurfaceFire),
    (VarId::SpotFirebrandDriftSurfaceFire, Prop::SpotCalcFirebrandDriftSurfaceFire),
    (VarId::SpotFirebrandHtSurfaceFire, Prop::SpotCalcFirebrandHtSurfaceFire),
    (VarId::SpotFlatDistSurfaceFire, Prop::SpotCalcFlatDistSurfaceFire),
    (VarId::SpotDistTorchingTrees, Prop::SpotCalcDistTorchingTrees),
    (VarId::SpotCoverHtTorchingTrees, Prop::SpotCalcCoverHtTorchingTrees),
    (VarId::SpotFlameDurTorchingTrees, Prop::SpotCalcFlameDurTorchingTrees),
    (VarId::SpotFlameHtTorchingTrees, Prop::SpotCalcFlameHtTorchingTrees),
    (VarId::SpotFlameRatioTorchingTrees, Prop::SpotCalcFlameRatioTorchingTrees),
    (VarId::SpotFirebrandHtTorchingTrees, Prop::SpotCalcFirebrandHtTorchingTrees),
    (VarId::SpotFlatDistTorchingTrees, Prop::SpotCalcFlatDistTorchingTrees),
];

const SPOT_MAP_OUTPUTS: &[(VarId, Prop)] = &[
    (VarId::SpotMapDistBurningPile, Prop::SpotCalcDistBurningPile),
    (VarId::SpotMapDistSurfaceFire, Prop::SpotCalcDistSurfaceFire),
    (VarId::SpotMapDistTorchingTrees, Prop::SpotCalcDistTorchingTrees),
];

impl Reconfig<'_> {
    pub(super) fn size(&mut self) {
        if Self::skip("size", self.config.modules.size) {
            return;
        }
        self.on(SIZE_NODES);
        self.outputs(SIZE_OUTPUTS);
        if self.config.map_distances {
            self.on(&[FunId::MapScale]);
            self.outputs(SIZE_MAP_OUTPUTS);
        }
    }

    pub(super) fn spot(&mut self) {
        if Self::skip("spot", self.config.modules.spot) {
            return;
        }
        self.on(&[
            FunId::SpotDistBurningPile,
            FunId::SpotDistSurfaceFire,
            FunId::SpotDistTorchingTrees,
        ]);
        if !self.config.modules.surface && self.config.surface.wind_speed.from_10m() {
            self.on(&[FunId::WindSpeedAt20Ft]);
        }
        self.outputs(SPOT_OUTPUTS);
        if self.config.map_distances {
            self.on(&[
                FunId::MapScale,
                FunId::SpotMapDistBurningPile,
                FunId::SpotMapDistSurfaceFire,
                FunId::SpotMapDistTorchingTrees,
            ]);
            self.outputs(SPOT_MAP_OUTPUTS);
        }
    }
}
