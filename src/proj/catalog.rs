//! Built-in reference tables: ellipsoids, datums, linear units and prime meridians.
//!
//! Names are case-sensitive. A miss is not an error; callers skip names
//! they cannot resolve.

/// Second defining parameter of a catalog ellipsoid, next to its semi-major axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Semi-minor axis (metres)
    B(f64),
    /// Reciprocal flattening
    Rf(f64),
    /// Flattening
    F(f64),
    /// Squared eccentricity
    Es(f64),
    /// Eccentricity
    E(f64),
}

#[derive(Clone, Copy, Debug)]
pub struct EllipsoidDef {
    pub id: &'static str,
    /// Semi-major axis (metres)
    pub a: f64,
    pub shape: Shape,
    pub name: &'static str,
}

/// A datum: a `key=value` shift definition plus the ellipsoid it sits on.
#[derive(Clone, Copy, Debug)]
pub struct DatumDef {
    pub id: &'static str,
    pub definition: &'static str,
    pub ellipse: &'static str,
    pub comments: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct UnitDef {
    pub id: &'static str,
    pub to_meter: f64,
    pub name: &'static str,
}

/// Prime meridian with its offset from Greenwich in DMS notation.
#[derive(Clone, Copy, Debug)]
pub struct PrimeMeridianDef {
    pub id: &'static str,
    pub defn: &'static str,
}

macro_rules! ellps {
    ($id:literal, $a:expr, $shape:expr, $name:literal) => {
        EllipsoidDef {
            id: $id,
            a: $a,
            shape: $shape,
            name: $name,
        }
    };
}

static ELLIPSOIDS: &[EllipsoidDef] = &[
    ellps!("MERIT", 6_378_137.0, Shape::Rf(298.257), "MERIT 1983"),
    ellps!("SGS85", 6_378_136.0, Shape::Rf(298.257), "Soviet Geodetic System 85"),
    ellps!("GRS80", 6_378_137.0, Shape::Rf(298.257_222_101), "GRS 1980(IUGG, 1980)"),
    ellps!("IAU76", 6_378_140.0, Shape::Rf(298.257), "IAU 1976"),
    ellps!("airy", 6_377_563.396, Shape::B(6_356_256.910), "Airy 1830"),
    ellps!("APL4.9", 6_378_137.0, Shape::Rf(298.25), "Appl. Physics. 1965"),
    ellps!("NWL9D", 6_378_145.0, Shape::Rf(298.25), "Naval Weapons Lab., 1965"),
    ellps!("mod_airy", 6_377_340.189, Shape::B(6_356_034.446), "Modified Airy"),
    ellps!("andrae", 6_377_104.43, Shape::Rf(300.0), "Andrae 1876 (Den., Iclnd.)"),
    ellps!("aust_SA", 6_378_160.0, Shape::Rf(298.25), "Australian Natl & S. Amer. 1969"),
    ellps!("GRS67", 6_378_160.0, Shape::Rf(298.247_167_427), "GRS 67(IUGG 1967)"),
    ellps!("bessel", 6_377_397.155, Shape::Rf(299.152_812_8), "Bessel 1841"),
    ellps!("bess_nam", 6_377_483.865, Shape::Rf(299.152_812_8), "Bessel 1841 (Namibia)"),
    ellps!("clrk66", 6_378_206.4, Shape::B(6_356_583.8), "Clarke 1866"),
    ellps!("clrk80", 6_378_249.145, Shape::Rf(293.4663), "Clarke 1880 mod."),
    ellps!("clrk80ign", 6_378_249.2, Shape::Rf(293.466_021_293_626_9), "Clarke 1880 (IGN)."),
    ellps!("CPM", 6_375_738.7, Shape::Rf(334.29), "Comm. des Poids et Mesures 1799"),
    ellps!("delmbr", 6_376_428.0, Shape::Rf(311.5), "Delambre 1810 (Belgium)"),
    ellps!("engelis", 6_378_136.05, Shape::Rf(298.2566), "Engelis 1985"),
    ellps!("evrst30", 6_377_276.345, Shape::Rf(300.8017), "Everest 1830"),
    ellps!("evrst48", 6_377_304.063, Shape::Rf(300.8017), "Everest 1948"),
    ellps!("evrst56", 6_377_301.243, Shape::Rf(300.8017), "Everest 1956"),
    ellps!("evrst69", 6_377_295.664, Shape::Rf(300.8017), "Everest 1969"),
    ellps!("evrstSS", 6_377_298.556, Shape::Rf(300.8017), "Everest (Sabah & Sarawak)"),
    ellps!("fschr60", 6_378_166.0, Shape::Rf(298.3), "Fischer (Mercury Datum) 1960"),
    ellps!("fschr60m", 6_378_155.0, Shape::Rf(298.3), "Modified Fischer 1960"),
    ellps!("fschr68", 6_378_150.0, Shape::Rf(298.3), "Fischer 1968"),
    ellps!("helmert", 6_378_200.0, Shape::Rf(298.3), "Helmert 1906"),
    ellps!("hough", 6_378_270.0, Shape::Rf(297.0), "Hough"),
    ellps!("intl", 6_378_388.0, Shape::Rf(297.0), "International 1909 (Hayford)"),
    ellps!("krass", 6_378_245.0, Shape::Rf(298.3), "Krassovsky, 1942"),
    ellps!("kaula", 6_378_163.0, Shape::Rf(298.24), "Kaula 1961"),
    ellps!("lerch", 6_378_139.0, Shape::Rf(298.257), "Lerch 1979"),
    ellps!("mprts", 6_397_300.0, Shape::Rf(191.0), "Maupertius 1738"),
    ellps!("new_intl", 6_378_157.5, Shape::B(6_356_772.2), "New International 1967"),
    ellps!("plessis", 6_376_523.0, Shape::B(6_355_863.0), "Plessis 1817 (France)"),
    ellps!("SEasia", 6_378_155.0, Shape::B(6_356_773.3205), "Southeast Asia"),
    ellps!("walbeck", 6_376_896.0, Shape::B(6_355_834.8467), "Walbeck"),
    ellps!("WGS60", 6_378_165.0, Shape::Rf(298.3), "WGS 60"),
    ellps!("WGS66", 6_378_145.0, Shape::Rf(298.25), "WGS 66"),
    ellps!("WGS72", 6_378_135.0, Shape::Rf(298.26), "WGS 72"),
    ellps!("WGS84", 6_378_137.0, Shape::Rf(298.257_223_563), "WGS 84"),
    ellps!("sphere", 6_370_997.0, Shape::B(6_370_997.0), "Normal Sphere (r=6370997)"),
];

static DATUMS: &[DatumDef] = &[
    DatumDef {
        id: "WGS84",
        definition: "towgs84=0,0,0",
        ellipse: "WGS84",
        comments: "",
    },
    DatumDef {
        id: "GGRS87",
        definition: "towgs84=-199.87,74.79,246.62",
        ellipse: "GRS80",
        comments: "Greek_Geodetic_Reference_System_1987",
    },
    DatumDef {
        id: "NAD83",
        definition: "towgs84=0,0,0",
        ellipse: "GRS80",
        comments: "North_American_Datum_1983",
    },
    DatumDef {
        id: "NAD27",
        definition: "nadgrids=@conus,@alaska,@ntv2_0.gsb,@ntv1_can.dat",
        ellipse: "clrk66",
        comments: "North_American_Datum_1927",
    },
    DatumDef {
        id: "potsdam",
        definition: "towgs84=598.1,73.7,418.2,0.202,0.045,-2.455,6.7",
        ellipse: "bessel",
        comments: "Potsdam Rauenberg 1950 DHDN",
    },
    DatumDef {
        id: "carthage",
        definition: "towgs84=-263.0,6.0,431.0",
        ellipse: "clrk80ign",
        comments: "Carthage 1934 Tunisia",
    },
    DatumDef {
        id: "hermannskogel",
        definition: "towgs84=577.326,90.129,463.919,5.137,1.474,5.297,2.4232",
        ellipse: "bessel",
        comments: "Hermannskogel",
    },
    DatumDef {
        id: "ire65",
        definition: "towgs84=482.530,-130.596,564.557,-1.042,-0.214,-0.631,8.15",
        ellipse: "mod_airy",
        comments: "Ireland 1965",
    },
    DatumDef {
        id: "nzgd49",
        definition: "towgs84=59.47,-5.04,187.44,0.47,-0.1,1.024,-4.5993",
        ellipse: "intl",
        comments: "New Zealand Geodetic Datum 1949",
    },
    DatumDef {
        id: "OSGB36",
        definition: "towgs84=446.448,-125.157,542.060,0.1502,0.2470,0.8421,-20.4894",
        ellipse: "airy",
        comments: "Airy 1830",
    },
];

static UNITS: &[UnitDef] = &[
    UnitDef { id: "km", to_meter: 1000.0, name: "Kilometer" },
    UnitDef { id: "m", to_meter: 1.0, name: "Meter" },
    UnitDef { id: "dm", to_meter: 0.1, name: "Decimeter" },
    UnitDef { id: "cm", to_meter: 0.01, name: "Centimeter" },
    UnitDef { id: "mm", to_meter: 0.001, name: "Millimeter" },
    UnitDef { id: "kmi", to_meter: 1852.0, name: "International Nautical Mile" },
    UnitDef { id: "in", to_meter: 0.0254, name: "International Inch" },
    UnitDef { id: "ft", to_meter: 0.3048, name: "International Foot" },
    UnitDef { id: "yd", to_meter: 0.9144, name: "International Yard" },
    UnitDef { id: "mi", to_meter: 1609.344, name: "International Statute Mile" },
    UnitDef { id: "fath", to_meter: 1.8288, name: "International Fathom" },
    UnitDef { id: "ch", to_meter: 20.1168, name: "International Chain" },
    UnitDef { id: "link", to_meter: 0.201168, name: "International Link" },
    UnitDef { id: "us-in", to_meter: 0.025_400_050_8, name: "U.S. Surveyor's Inch" },
    UnitDef { id: "us-ft", to_meter: 0.304_800_609_601_219, name: "U.S. Surveyor's Foot" },
    UnitDef { id: "us-yd", to_meter: 0.914_401_828_803_658, name: "U.S. Surveyor's Yard" },
    UnitDef { id: "us-ch", to_meter: 20.116_840_233_680_47, name: "U.S. Surveyor's Chain" },
    UnitDef { id: "us-mi", to_meter: 1609.347_218_694_437, name: "U.S. Surveyor's Statute Mile" },
    UnitDef { id: "ind-yd", to_meter: 0.914_395_23, name: "Indian Yard" },
    UnitDef { id: "ind-ft", to_meter: 0.304_798_41, name: "Indian Foot" },
    UnitDef { id: "ind-ch", to_meter: 20.116_695_06, name: "Indian Chain" },
];

static PRIME_MERIDIANS: &[PrimeMeridianDef] = &[
    PrimeMeridianDef { id: "greenwich", defn: "0dE" },
    PrimeMeridianDef { id: "lisbon", defn: "9d07'54.862\"W" },
    PrimeMeridianDef { id: "paris", defn: "2d20'14.025\"E" },
    PrimeMeridianDef { id: "bogota", defn: "74d04'51.3\"W" },
    PrimeMeridianDef { id: "madrid", defn: "3d41'16.58\"W" },
    PrimeMeridianDef { id: "rome", defn: "12d27'8.4\"E" },
    PrimeMeridianDef { id: "bern", defn: "7d26'22.5\"E" },
    PrimeMeridianDef { id: "jakarta", defn: "106d48'27.79\"E" },
    PrimeMeridianDef { id: "ferro", defn: "17d40'W" },
    PrimeMeridianDef { id: "brussels", defn: "4d22'4.71\"E" },
    PrimeMeridianDef { id: "stockholm", defn: "18d3'29.8\"E" },
    PrimeMeridianDef { id: "athens", defn: "23d42'58.815\"E" },
    PrimeMeridianDef { id: "oslo", defn: "10d43'22.5\"E" },
];

pub fn ellipsoid(name: &str) -> Option<&'static EllipsoidDef> {
    ELLIPSOIDS.iter().find(|e| e.id == name)
}

pub fn datum(name: &str) -> Option<&'static DatumDef> {
    DATUMS.iter().find(|d| d.id == name)
}

pub fn unit(name: &str) -> Option<&'static UnitDef> {
    UNITS.iter().find(|u| u.id == name)
}

pub fn prime_meridian(name: &str) -> Option<&'static PrimeMeridianDef> {
    PRIME_MERIDIANS.iter().find(|pm| pm.id == name)
}
