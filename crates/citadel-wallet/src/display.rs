//! Color derivations for the domain enums. Labels and icons live next to
//! the enums in the core crate; everything egui-specific stays here.

use egui::Color32;

use citadel_wallet_core::{Asset, AssetAuthenticity, AssetCategory, ContractType, VerificationStatus};

const ORANGE: Color32 = Color32::from_rgb(255, 149, 0);
const YELLOW: Color32 = Color32::from_rgb(255, 204, 0);
const GREEN: Color32 = Color32::from_rgb(52, 199, 89);
const SOFT_GREEN: Color32 = Color32::from_rgb(85, 255, 85);
const RED: Color32 = Color32::from_rgb(255, 59, 48);
const PURPLE: Color32 = Color32::from_rgb(175, 82, 222);
const BLUE: Color32 = Color32::from_rgb(0, 122, 255);
const SOFT_BLUE: Color32 = Color32::from_rgb(85, 85, 255);

/// Primary/secondary color pair for an enum member. The gradient is always
/// derived from the pair, never stored separately.
pub trait ColorPair {
    fn primary_color(&self) -> Color32;
    fn secondary_color(&self) -> Color32;

    fn gradient(&self) -> (Color32, Color32) {
        (self.primary_color(), self.secondary_color())
    }
}

impl ColorPair for AssetCategory {
    fn primary_color(&self) -> Color32 {
        match self {
            AssetCategory::Currency => ORANGE,
            AssetCategory::Stablecoin => GREEN,
            AssetCategory::Token => RED,
            AssetCategory::Nft => BLUE,
        }
    }

    fn secondary_color(&self) -> Color32 {
        match self {
            AssetCategory::Currency => YELLOW,
            AssetCategory::Stablecoin => SOFT_GREEN,
            AssetCategory::Token => PURPLE,
            AssetCategory::Nft => SOFT_BLUE,
        }
    }
}

impl ColorPair for ContractType {
    fn primary_color(&self) -> Color32 {
        match self {
            ContractType::Current => ORANGE,
            ContractType::Saving => GREEN,
            ContractType::Instant => RED,
            ContractType::Storm
            | ContractType::Prometheus
            | ContractType::Trading
            | ContractType::Staking
            | ContractType::Liquidity => BLUE,
        }
    }

    fn secondary_color(&self) -> Color32 {
        match self {
            ContractType::Current => YELLOW,
            ContractType::Saving => SOFT_GREEN,
            ContractType::Instant => PURPLE,
            ContractType::Storm
            | ContractType::Prometheus
            | ContractType::Trading
            | ContractType::Staking
            | ContractType::Liquidity => SOFT_BLUE,
        }
    }
}

impl ColorPair for Asset {
    fn primary_color(&self) -> Color32 {
        self.category.primary_color()
    }

    fn secondary_color(&self) -> Color32 {
        self.category.secondary_color()
    }
}

pub trait StatusColor {
    fn verified_color(&self) -> Color32;
}

impl StatusColor for VerificationStatus {
    fn verified_color(&self) -> Color32 {
        match self {
            VerificationStatus::PublicTruth => BLUE,
            VerificationStatus::Verified => GREEN,
            VerificationStatus::Unverified => ORANGE,
        }
    }
}

impl StatusColor for AssetAuthenticity {
    fn verified_color(&self) -> Color32 {
        self.status.verified_color()
    }
}

#[cfg(test)]
mod tests {
    use super::{ColorPair, StatusColor};
    use citadel_wallet_core::{AssetCategory, ContractType, VerificationStatus};
    use egui::Color32;

    #[test]
    fn every_contract_type_has_a_defined_color_pair() {
        for contract_type in ContractType::ALL {
            let (primary, secondary) = contract_type.gradient();
            assert_ne!(primary, Color32::TRANSPARENT, "{contract_type:?}");
            assert_ne!(secondary, Color32::TRANSPARENT, "{contract_type:?}");
            assert_ne!(primary, secondary, "{contract_type:?}");
        }
    }

    #[test]
    fn every_asset_category_has_a_defined_color_pair() {
        for category in [
            AssetCategory::Currency,
            AssetCategory::Stablecoin,
            AssetCategory::Token,
            AssetCategory::Nft,
        ] {
            let (primary, secondary) = category.gradient();
            assert_ne!(primary, Color32::TRANSPARENT, "{category:?}");
            assert_ne!(secondary, Color32::TRANSPARENT, "{category:?}");
        }
    }

    #[test]
    fn verification_statuses_map_to_distinct_colors() {
        let colors = [
            VerificationStatus::PublicTruth.verified_color(),
            VerificationStatus::Verified.verified_color(),
            VerificationStatus::Unverified.verified_color(),
        ];
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }
}
