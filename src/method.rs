//! The closed catalog of hierarchy members. Each named method
//! is just a configuration record: which unit space to refine,
//! whether the identity marker enters the initial colouring,
//! which primitives are concatenated each round and how the
//! stable colouring is pooled. Adding a member means adding a
//! row here, never a new refinement loop.

use std::{fmt, str::FromStr};

use crate::wl::{Pooling, Primitive};

use Primitive::*;

const WL2: &[Primitive] = &[PointwiseUv, GlobalU, GlobalV];
const FWL2: &[Primitive] = &[PointwiseUv, FolkloreGlobal];
const LFWL: &[Primitive] = &[PointwiseUv, FolkloreLocalU];
const SLFWL: &[Primitive] = &[PointwiseUv, FolkloreLocalUv];
const SWL: &[Primitive] = &[PointwiseUv, LocalU];
const SWL_P: &[Primitive] = &[PointwiseUv, LocalU, PointwiseUu];
const SWL_G: &[Primitive] = &[PointwiseUv, LocalU, PointwiseUu, GlobalU];
const PSWL: &[Primitive] = &[PointwiseUv, LocalU, PointwiseVv];
const GSWL: &[Primitive] = &[PointwiseUv, LocalU, GlobalV];
const GSWL_P: &[Primitive] = &[PointwiseUv, LocalU, GlobalV, PointwiseVv];
const SSWL: &[Primitive] = &[PointwiseUv, LocalU, LocalV];
const FULL_SWL: &[Primitive] = &[
    PointwiseUv,
    PointwiseVu,
    PointwiseUu,
    PointwiseVv,
    GlobalU,
    GlobalV,
    LocalU,
    LocalV,
];

/// Unknown method name.
#[derive(Debug, PartialEq, Eq)]
pub struct MethodError(pub String);

impl fmt::Display for MethodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown refinement method `{}`", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Wl1,
    Wl2,
    Fwl2,
    Lfwl,
    Slfwl,
    SwlSv,
    SwlVs,
    SwlSvP,
    SwlVsP,
    SwlSvG,
    SwlVsG,
    PswlSv,
    PswlVs,
    GswlSv,
    GswlVs,
    GswlSvP,
    GswlVsP,
    SswlSv,
    SswlVs,
    FullSwlSv,
    FullSwlVs,
    I2wl,
}

/// Everything the comparer needs to run a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodConfig {
    /// Node-indexed units, classic WL1.
    Node,
    /// Ordered-pair units with a primitive composition.
    Pair {
        identity: bool,
        primitives: &'static [Primitive],
        pooling: Pooling,
    },
    /// (Arc, node) units.
    EdgeNode { identity: bool },
}

impl Method {
    /// All catalog members in canonical order.
    pub const ALL: [Method; 22] = [
        Method::Wl1,
        Method::Wl2,
        Method::Fwl2,
        Method::Lfwl,
        Method::Slfwl,
        Method::SwlSv,
        Method::SwlVs,
        Method::SwlSvP,
        Method::SwlVsP,
        Method::SwlSvG,
        Method::SwlVsG,
        Method::PswlSv,
        Method::PswlVs,
        Method::GswlSv,
        Method::GswlVs,
        Method::GswlSvP,
        Method::GswlVsP,
        Method::SswlSv,
        Method::SswlVs,
        Method::FullSwlSv,
        Method::FullSwlVs,
        Method::I2wl,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Method::Wl1 => "WL1",
            Method::Wl2 => "WL2",
            Method::Fwl2 => "FWL2",
            Method::Lfwl => "LFWL",
            Method::Slfwl => "SLFWL",
            Method::SwlSv => "SWL_SV",
            Method::SwlVs => "SWL_VS",
            Method::SwlSvP => "SWL_SV_P",
            Method::SwlVsP => "SWL_VS_P",
            Method::SwlSvG => "SWL_SV_G",
            Method::SwlVsG => "SWL_VS_G",
            Method::PswlSv => "PSWL_SV",
            Method::PswlVs => "PSWL_VS",
            Method::GswlSv => "GSWL_SV",
            Method::GswlVs => "GSWL_VS",
            Method::GswlSvP => "GSWL_SV_P",
            Method::GswlVsP => "GSWL_VS_P",
            Method::SswlSv => "SSWL_SV",
            Method::SswlVs => "SSWL_VS",
            Method::FullSwlSv => "FullSWL_SV",
            Method::FullSwlVs => "FullSWL_VS",
            Method::I2wl => "I2WL",
        }
    }

    pub fn config(self) -> MethodConfig {
        let pair = |primitives, pooling| MethodConfig::Pair {
            identity: true,
            primitives,
            pooling,
        };

        match self {
            Method::Wl1 => MethodConfig::Node,
            Method::Wl2 => pair(WL2, Pooling::All),
            Method::Fwl2 => pair(FWL2, Pooling::All),
            Method::Lfwl => pair(LFWL, Pooling::All),
            Method::Slfwl => pair(SLFWL, Pooling::All),
            Method::SwlSv => pair(SWL, Pooling::Sv),
            Method::SwlVs => pair(SWL, Pooling::Vs),
            Method::SwlSvP => pair(SWL_P, Pooling::Sv),
            Method::SwlVsP => pair(SWL_P, Pooling::Vs),
            Method::SwlSvG => pair(SWL_G, Pooling::Sv),
            Method::SwlVsG => pair(SWL_G, Pooling::Vs),
            Method::PswlSv => pair(PSWL, Pooling::Sv),
            Method::PswlVs => pair(PSWL, Pooling::Vs),
            Method::GswlSv => pair(GSWL, Pooling::Sv),
            Method::GswlVs => pair(GSWL, Pooling::Vs),
            Method::GswlSvP => pair(GSWL_P, Pooling::Sv),
            Method::GswlVsP => pair(GSWL_P, Pooling::Vs),
            Method::SswlSv => pair(SSWL, Pooling::Sv),
            Method::SswlVs => pair(SSWL, Pooling::Vs),
            Method::FullSwlSv => pair(FULL_SWL, Pooling::Sv),
            Method::FullSwlVs => pair(FULL_SWL, Pooling::Vs),
            Method::I2wl => MethodConfig::EdgeNode { identity: true },
        }
    }
}

impl FromStr for Method {
    type Err = MethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .iter()
            .find(|method| method.name() == s)
            .copied()
            .ok_or_else(|| MethodError(s.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_every_name_resolves() {
        for method in &Method::ALL {
            assert_eq!(Ok(*method), method.name().parse());
        }
    }

    #[test]
    fn test_unknown_name_rejected() {
        assert_eq!(
            Err(MethodError("WL3".to_string())),
            "WL3".parse::<Method>()
        );
        // Resolution is exact, not case-insensitive.
        assert!("wl1".parse::<Method>().is_err());
    }

    #[test]
    fn test_subgraph_methods_pool_grouped() {
        match Method::SwlSv.config() {
            MethodConfig::Pair {
                identity,
                primitives,
                pooling,
            } => {
                assert!(identity);
                assert_eq!(&[PointwiseUv, LocalU], primitives);
                assert_eq!(Pooling::Sv, pooling);
            }
            config => panic!("unexpected config {:?}", config),
        }
    }
}
