//! Satellite product filename fixtures
//!
//! Each fixture pairs a filename template with a real-world-shaped filename
//! it should match. Expected field values live next to the tests that use them.

/// A template and a filename that follows it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductFixture {
    /// Short product name, usable as a pattern key
    pub name: &'static str,
    pub template: &'static str,
    pub filename: &'static str,
}

/// AVHRR HRPT level 1b
pub const HRPT: ProductFixture = ProductFixture {
    name: "hrpt",
    template: "/somedir/{directory}/hrpt_{platform:4s}{platnum:2s}_{time:%Y%m%d_%H%M}_{orbit:05d}.l1b",
    filename: "/somedir/otherdir/hrpt_noaa16_20140210_1004_69022.l1b",
};

/// IASI level 2 from the EUMETSAT broadcast
pub const IASI_L2: ProductFixture = ProductFixture {
    name: "iasi_l2",
    template: "W_XX-EUMETSAT-{reception_location},{instrument},{long_platform_id}+{processing_location}_C_EUMS_{processing_time:%Y%m%d%H%M%S}_IASI_PW3_02_{platform_id}_{start_time:%Y%m%d-%H%M%S}Z_{end_time:%Y%m%d.%H%M%S}Z.hdf",
    filename: "W_XX-EUMETSAT-kan,iasi,metopb+kan_C_EUMS_20170920103559_IASI_PW3_02_M01_20170920-102217Z_20170920.102912Z.hdf",
};

/// Sentinel-3 OLCI level 1b, one radiance file inside the SAFE directory
pub const OLCI_L1B: ProductFixture = ProductFixture {
    name: "olci_l1b",
    template: "{mission_id:3s}_OL_1_{datatype_id:_<6s}_{start_time:%Y%m%dT%H%M%S}_{end_time:%Y%m%dT%H%M%S}_{creation_time:%Y%m%dT%H%M%S}_{duration:4d}_{cycle:3d}_{relative_orbit:3d}_{frame:4d}_{centre:3s}_{platform_mode:1s}_{timeliness:2s}_{collection:3s}.SEN3/{dataset_name}_radiance.nc",
    filename: "S3A_OL_1_EFR____20180916T090539_20180916T090839_20180916T090539_0001_001_001_0001_CEN_M_AA_AAA.SEN3/Oa21_radiance.nc",
};

/// Every fixture, in name order
pub const PRODUCTS: [ProductFixture; 3] = [HRPT, IASI_L2, OLCI_L1B];

/// Look a fixture up by name
pub fn by_name(name: &str) -> Option<ProductFixture> {
    PRODUCTS.iter().copied().find(|fixture| fixture.name == name)
}
