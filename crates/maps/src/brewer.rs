//! ColorBrewer discrete palettes
//!
//! The complete grid of ColorBrewer schemes (colorbrewer2.org) at every
//! published size from 3 to 12 colours. Generated from the scheme data;
//! channel values keep the historical n/265 scaling of the source
//! tables.

use crate::MapType;

/// One generated palette: name, semantic type and colour table.
pub(crate) struct BrewerEntry {
    pub(crate) name: &'static str,
    pub(crate) typ: MapType,
    pub(crate) palette: &'static [[f64; 3]],
}

const ACCENT3: [[f64; 3]; 3] = [
    [127.0 / 265.0, 201.0 / 265.0, 127.0 / 265.0],
    [190.0 / 265.0, 174.0 / 265.0, 212.0 / 265.0],
    [253.0 / 265.0, 192.0 / 265.0, 134.0 / 265.0],
];

const ACCENT4: [[f64; 3]; 4] = [
    [127.0 / 265.0, 201.0 / 265.0, 127.0 / 265.0],
    [190.0 / 265.0, 174.0 / 265.0, 212.0 / 265.0],
    [253.0 / 265.0, 192.0 / 265.0, 134.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 153.0 / 265.0],
];

const ACCENT5: [[f64; 3]; 5] = [
    [127.0 / 265.0, 201.0 / 265.0, 127.0 / 265.0],
    [190.0 / 265.0, 174.0 / 265.0, 212.0 / 265.0],
    [253.0 / 265.0, 192.0 / 265.0, 134.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 153.0 / 265.0],
    [56.0 / 265.0, 108.0 / 265.0, 176.0 / 265.0],
];

const ACCENT6: [[f64; 3]; 6] = [
    [127.0 / 265.0, 201.0 / 265.0, 127.0 / 265.0],
    [190.0 / 265.0, 174.0 / 265.0, 212.0 / 265.0],
    [253.0 / 265.0, 192.0 / 265.0, 134.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 153.0 / 265.0],
    [56.0 / 265.0, 108.0 / 265.0, 176.0 / 265.0],
    [240.0 / 265.0, 2.0 / 265.0, 127.0 / 265.0],
];

const ACCENT7: [[f64; 3]; 7] = [
    [127.0 / 265.0, 201.0 / 265.0, 127.0 / 265.0],
    [190.0 / 265.0, 174.0 / 265.0, 212.0 / 265.0],
    [253.0 / 265.0, 192.0 / 265.0, 134.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 153.0 / 265.0],
    [56.0 / 265.0, 108.0 / 265.0, 176.0 / 265.0],
    [240.0 / 265.0, 2.0 / 265.0, 127.0 / 265.0],
    [191.0 / 265.0, 91.0 / 265.0, 23.0 / 265.0],
];

const ACCENT8: [[f64; 3]; 8] = [
    [127.0 / 265.0, 201.0 / 265.0, 127.0 / 265.0],
    [190.0 / 265.0, 174.0 / 265.0, 212.0 / 265.0],
    [253.0 / 265.0, 192.0 / 265.0, 134.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 153.0 / 265.0],
    [56.0 / 265.0, 108.0 / 265.0, 176.0 / 265.0],
    [240.0 / 265.0, 2.0 / 265.0, 127.0 / 265.0],
    [191.0 / 265.0, 91.0 / 265.0, 23.0 / 265.0],
    [102.0 / 265.0, 102.0 / 265.0, 102.0 / 265.0],
];

const BLUES3: [[f64; 3]; 3] = [
    [222.0 / 265.0, 235.0 / 265.0, 247.0 / 265.0],
    [158.0 / 265.0, 202.0 / 265.0, 225.0 / 265.0],
    [49.0 / 265.0, 130.0 / 265.0, 189.0 / 265.0],
];

const BLUES4: [[f64; 3]; 4] = [
    [239.0 / 265.0, 243.0 / 265.0, 255.0 / 265.0],
    [189.0 / 265.0, 215.0 / 265.0, 231.0 / 265.0],
    [107.0 / 265.0, 174.0 / 265.0, 214.0 / 265.0],
    [33.0 / 265.0, 113.0 / 265.0, 181.0 / 265.0],
];

const BLUES5: [[f64; 3]; 5] = [
    [239.0 / 265.0, 243.0 / 265.0, 255.0 / 265.0],
    [189.0 / 265.0, 215.0 / 265.0, 231.0 / 265.0],
    [107.0 / 265.0, 174.0 / 265.0, 214.0 / 265.0],
    [49.0 / 265.0, 130.0 / 265.0, 189.0 / 265.0],
    [8.0 / 265.0, 81.0 / 265.0, 156.0 / 265.0],
];

const BLUES6: [[f64; 3]; 6] = [
    [239.0 / 265.0, 243.0 / 265.0, 255.0 / 265.0],
    [198.0 / 265.0, 219.0 / 265.0, 239.0 / 265.0],
    [158.0 / 265.0, 202.0 / 265.0, 225.0 / 265.0],
    [107.0 / 265.0, 174.0 / 265.0, 214.0 / 265.0],
    [49.0 / 265.0, 130.0 / 265.0, 189.0 / 265.0],
    [8.0 / 265.0, 81.0 / 265.0, 156.0 / 265.0],
];

const BLUES7: [[f64; 3]; 7] = [
    [239.0 / 265.0, 243.0 / 265.0, 255.0 / 265.0],
    [198.0 / 265.0, 219.0 / 265.0, 239.0 / 265.0],
    [158.0 / 265.0, 202.0 / 265.0, 225.0 / 265.0],
    [107.0 / 265.0, 174.0 / 265.0, 214.0 / 265.0],
    [66.0 / 265.0, 146.0 / 265.0, 198.0 / 265.0],
    [33.0 / 265.0, 113.0 / 265.0, 181.0 / 265.0],
    [8.0 / 265.0, 69.0 / 265.0, 148.0 / 265.0],
];

const BLUES8: [[f64; 3]; 8] = [
    [247.0 / 265.0, 251.0 / 265.0, 255.0 / 265.0],
    [222.0 / 265.0, 235.0 / 265.0, 247.0 / 265.0],
    [198.0 / 265.0, 219.0 / 265.0, 239.0 / 265.0],
    [158.0 / 265.0, 202.0 / 265.0, 225.0 / 265.0],
    [107.0 / 265.0, 174.0 / 265.0, 214.0 / 265.0],
    [66.0 / 265.0, 146.0 / 265.0, 198.0 / 265.0],
    [33.0 / 265.0, 113.0 / 265.0, 181.0 / 265.0],
    [8.0 / 265.0, 69.0 / 265.0, 148.0 / 265.0],
];

const BLUES9: [[f64; 3]; 9] = [
    [247.0 / 265.0, 251.0 / 265.0, 255.0 / 265.0],
    [222.0 / 265.0, 235.0 / 265.0, 247.0 / 265.0],
    [198.0 / 265.0, 219.0 / 265.0, 239.0 / 265.0],
    [158.0 / 265.0, 202.0 / 265.0, 225.0 / 265.0],
    [107.0 / 265.0, 174.0 / 265.0, 214.0 / 265.0],
    [66.0 / 265.0, 146.0 / 265.0, 198.0 / 265.0],
    [33.0 / 265.0, 113.0 / 265.0, 181.0 / 265.0],
    [8.0 / 265.0, 81.0 / 265.0, 156.0 / 265.0],
    [8.0 / 265.0, 48.0 / 265.0, 107.0 / 265.0],
];

const BRBG3: [[f64; 3]; 3] = [
    [216.0 / 265.0, 179.0 / 265.0, 101.0 / 265.0],
    [245.0 / 265.0, 245.0 / 265.0, 245.0 / 265.0],
    [90.0 / 265.0, 180.0 / 265.0, 172.0 / 265.0],
];

const BRBG4: [[f64; 3]; 4] = [
    [166.0 / 265.0, 97.0 / 265.0, 26.0 / 265.0],
    [223.0 / 265.0, 194.0 / 265.0, 125.0 / 265.0],
    [128.0 / 265.0, 205.0 / 265.0, 193.0 / 265.0],
    [1.0 / 265.0, 133.0 / 265.0, 113.0 / 265.0],
];

const BRBG5: [[f64; 3]; 5] = [
    [166.0 / 265.0, 97.0 / 265.0, 26.0 / 265.0],
    [223.0 / 265.0, 194.0 / 265.0, 125.0 / 265.0],
    [245.0 / 265.0, 245.0 / 265.0, 245.0 / 265.0],
    [128.0 / 265.0, 205.0 / 265.0, 193.0 / 265.0],
    [1.0 / 265.0, 133.0 / 265.0, 113.0 / 265.0],
];

const BRBG6: [[f64; 3]; 6] = [
    [140.0 / 265.0, 81.0 / 265.0, 10.0 / 265.0],
    [216.0 / 265.0, 179.0 / 265.0, 101.0 / 265.0],
    [246.0 / 265.0, 232.0 / 265.0, 195.0 / 265.0],
    [199.0 / 265.0, 234.0 / 265.0, 229.0 / 265.0],
    [90.0 / 265.0, 180.0 / 265.0, 172.0 / 265.0],
    [1.0 / 265.0, 102.0 / 265.0, 94.0 / 265.0],
];

const BRBG7: [[f64; 3]; 7] = [
    [140.0 / 265.0, 81.0 / 265.0, 10.0 / 265.0],
    [216.0 / 265.0, 179.0 / 265.0, 101.0 / 265.0],
    [246.0 / 265.0, 232.0 / 265.0, 195.0 / 265.0],
    [245.0 / 265.0, 245.0 / 265.0, 245.0 / 265.0],
    [199.0 / 265.0, 234.0 / 265.0, 229.0 / 265.0],
    [90.0 / 265.0, 180.0 / 265.0, 172.0 / 265.0],
    [1.0 / 265.0, 102.0 / 265.0, 94.0 / 265.0],
];

const BRBG8: [[f64; 3]; 8] = [
    [140.0 / 265.0, 81.0 / 265.0, 10.0 / 265.0],
    [191.0 / 265.0, 129.0 / 265.0, 45.0 / 265.0],
    [223.0 / 265.0, 194.0 / 265.0, 125.0 / 265.0],
    [246.0 / 265.0, 232.0 / 265.0, 195.0 / 265.0],
    [199.0 / 265.0, 234.0 / 265.0, 229.0 / 265.0],
    [128.0 / 265.0, 205.0 / 265.0, 193.0 / 265.0],
    [53.0 / 265.0, 151.0 / 265.0, 143.0 / 265.0],
    [1.0 / 265.0, 102.0 / 265.0, 94.0 / 265.0],
];

const BRBG9: [[f64; 3]; 9] = [
    [140.0 / 265.0, 81.0 / 265.0, 10.0 / 265.0],
    [191.0 / 265.0, 129.0 / 265.0, 45.0 / 265.0],
    [223.0 / 265.0, 194.0 / 265.0, 125.0 / 265.0],
    [246.0 / 265.0, 232.0 / 265.0, 195.0 / 265.0],
    [245.0 / 265.0, 245.0 / 265.0, 245.0 / 265.0],
    [199.0 / 265.0, 234.0 / 265.0, 229.0 / 265.0],
    [128.0 / 265.0, 205.0 / 265.0, 193.0 / 265.0],
    [53.0 / 265.0, 151.0 / 265.0, 143.0 / 265.0],
    [1.0 / 265.0, 102.0 / 265.0, 94.0 / 265.0],
];

const BRBG10: [[f64; 3]; 10] = [
    [84.0 / 265.0, 48.0 / 265.0, 5.0 / 265.0],
    [140.0 / 265.0, 81.0 / 265.0, 10.0 / 265.0],
    [191.0 / 265.0, 129.0 / 265.0, 45.0 / 265.0],
    [223.0 / 265.0, 194.0 / 265.0, 125.0 / 265.0],
    [246.0 / 265.0, 232.0 / 265.0, 195.0 / 265.0],
    [199.0 / 265.0, 234.0 / 265.0, 229.0 / 265.0],
    [128.0 / 265.0, 205.0 / 265.0, 193.0 / 265.0],
    [53.0 / 265.0, 151.0 / 265.0, 143.0 / 265.0],
    [1.0 / 265.0, 102.0 / 265.0, 94.0 / 265.0],
    [0.0 / 265.0, 60.0 / 265.0, 48.0 / 265.0],
];

const BRBG11: [[f64; 3]; 11] = [
    [84.0 / 265.0, 48.0 / 265.0, 5.0 / 265.0],
    [140.0 / 265.0, 81.0 / 265.0, 10.0 / 265.0],
    [191.0 / 265.0, 129.0 / 265.0, 45.0 / 265.0],
    [223.0 / 265.0, 194.0 / 265.0, 125.0 / 265.0],
    [246.0 / 265.0, 232.0 / 265.0, 195.0 / 265.0],
    [245.0 / 265.0, 245.0 / 265.0, 245.0 / 265.0],
    [199.0 / 265.0, 234.0 / 265.0, 229.0 / 265.0],
    [128.0 / 265.0, 205.0 / 265.0, 193.0 / 265.0],
    [53.0 / 265.0, 151.0 / 265.0, 143.0 / 265.0],
    [1.0 / 265.0, 102.0 / 265.0, 94.0 / 265.0],
    [0.0 / 265.0, 60.0 / 265.0, 48.0 / 265.0],
];

const BUGN3: [[f64; 3]; 3] = [
    [229.0 / 265.0, 245.0 / 265.0, 249.0 / 265.0],
    [153.0 / 265.0, 216.0 / 265.0, 201.0 / 265.0],
    [44.0 / 265.0, 162.0 / 265.0, 95.0 / 265.0],
];

const BUGN4: [[f64; 3]; 4] = [
    [237.0 / 265.0, 248.0 / 265.0, 251.0 / 265.0],
    [178.0 / 265.0, 226.0 / 265.0, 226.0 / 265.0],
    [102.0 / 265.0, 194.0 / 265.0, 164.0 / 265.0],
    [35.0 / 265.0, 139.0 / 265.0, 69.0 / 265.0],
];

const BUGN5: [[f64; 3]; 5] = [
    [237.0 / 265.0, 248.0 / 265.0, 251.0 / 265.0],
    [178.0 / 265.0, 226.0 / 265.0, 226.0 / 265.0],
    [102.0 / 265.0, 194.0 / 265.0, 164.0 / 265.0],
    [44.0 / 265.0, 162.0 / 265.0, 95.0 / 265.0],
    [0.0 / 265.0, 109.0 / 265.0, 44.0 / 265.0],
];

const BUGN6: [[f64; 3]; 6] = [
    [237.0 / 265.0, 248.0 / 265.0, 251.0 / 265.0],
    [204.0 / 265.0, 236.0 / 265.0, 230.0 / 265.0],
    [153.0 / 265.0, 216.0 / 265.0, 201.0 / 265.0],
    [102.0 / 265.0, 194.0 / 265.0, 164.0 / 265.0],
    [44.0 / 265.0, 162.0 / 265.0, 95.0 / 265.0],
    [0.0 / 265.0, 109.0 / 265.0, 44.0 / 265.0],
];

const BUGN7: [[f64; 3]; 7] = [
    [237.0 / 265.0, 248.0 / 265.0, 251.0 / 265.0],
    [204.0 / 265.0, 236.0 / 265.0, 230.0 / 265.0],
    [153.0 / 265.0, 216.0 / 265.0, 201.0 / 265.0],
    [102.0 / 265.0, 194.0 / 265.0, 164.0 / 265.0],
    [65.0 / 265.0, 174.0 / 265.0, 118.0 / 265.0],
    [35.0 / 265.0, 139.0 / 265.0, 69.0 / 265.0],
    [0.0 / 265.0, 88.0 / 265.0, 36.0 / 265.0],
];

const BUGN8: [[f64; 3]; 8] = [
    [247.0 / 265.0, 252.0 / 265.0, 253.0 / 265.0],
    [229.0 / 265.0, 245.0 / 265.0, 249.0 / 265.0],
    [204.0 / 265.0, 236.0 / 265.0, 230.0 / 265.0],
    [153.0 / 265.0, 216.0 / 265.0, 201.0 / 265.0],
    [102.0 / 265.0, 194.0 / 265.0, 164.0 / 265.0],
    [65.0 / 265.0, 174.0 / 265.0, 118.0 / 265.0],
    [35.0 / 265.0, 139.0 / 265.0, 69.0 / 265.0],
    [0.0 / 265.0, 88.0 / 265.0, 36.0 / 265.0],
];

const BUGN9: [[f64; 3]; 9] = [
    [247.0 / 265.0, 252.0 / 265.0, 253.0 / 265.0],
    [229.0 / 265.0, 245.0 / 265.0, 249.0 / 265.0],
    [204.0 / 265.0, 236.0 / 265.0, 230.0 / 265.0],
    [153.0 / 265.0, 216.0 / 265.0, 201.0 / 265.0],
    [102.0 / 265.0, 194.0 / 265.0, 164.0 / 265.0],
    [65.0 / 265.0, 174.0 / 265.0, 118.0 / 265.0],
    [35.0 / 265.0, 139.0 / 265.0, 69.0 / 265.0],
    [0.0 / 265.0, 109.0 / 265.0, 44.0 / 265.0],
    [0.0 / 265.0, 68.0 / 265.0, 27.0 / 265.0],
];

const BUPU3: [[f64; 3]; 3] = [
    [224.0 / 265.0, 236.0 / 265.0, 244.0 / 265.0],
    [158.0 / 265.0, 188.0 / 265.0, 218.0 / 265.0],
    [136.0 / 265.0, 86.0 / 265.0, 167.0 / 265.0],
];

const BUPU4: [[f64; 3]; 4] = [
    [237.0 / 265.0, 248.0 / 265.0, 251.0 / 265.0],
    [179.0 / 265.0, 205.0 / 265.0, 227.0 / 265.0],
    [140.0 / 265.0, 150.0 / 265.0, 198.0 / 265.0],
    [136.0 / 265.0, 65.0 / 265.0, 157.0 / 265.0],
];

const BUPU5: [[f64; 3]; 5] = [
    [237.0 / 265.0, 248.0 / 265.0, 251.0 / 265.0],
    [179.0 / 265.0, 205.0 / 265.0, 227.0 / 265.0],
    [140.0 / 265.0, 150.0 / 265.0, 198.0 / 265.0],
    [136.0 / 265.0, 86.0 / 265.0, 167.0 / 265.0],
    [129.0 / 265.0, 15.0 / 265.0, 124.0 / 265.0],
];

const BUPU6: [[f64; 3]; 6] = [
    [237.0 / 265.0, 248.0 / 265.0, 251.0 / 265.0],
    [191.0 / 265.0, 211.0 / 265.0, 230.0 / 265.0],
    [158.0 / 265.0, 188.0 / 265.0, 218.0 / 265.0],
    [140.0 / 265.0, 150.0 / 265.0, 198.0 / 265.0],
    [136.0 / 265.0, 86.0 / 265.0, 167.0 / 265.0],
    [129.0 / 265.0, 15.0 / 265.0, 124.0 / 265.0],
];

const BUPU7: [[f64; 3]; 7] = [
    [237.0 / 265.0, 248.0 / 265.0, 251.0 / 265.0],
    [191.0 / 265.0, 211.0 / 265.0, 230.0 / 265.0],
    [158.0 / 265.0, 188.0 / 265.0, 218.0 / 265.0],
    [140.0 / 265.0, 150.0 / 265.0, 198.0 / 265.0],
    [140.0 / 265.0, 107.0 / 265.0, 177.0 / 265.0],
    [136.0 / 265.0, 65.0 / 265.0, 157.0 / 265.0],
    [110.0 / 265.0, 1.0 / 265.0, 107.0 / 265.0],
];

const BUPU8: [[f64; 3]; 8] = [
    [247.0 / 265.0, 252.0 / 265.0, 253.0 / 265.0],
    [224.0 / 265.0, 236.0 / 265.0, 244.0 / 265.0],
    [191.0 / 265.0, 211.0 / 265.0, 230.0 / 265.0],
    [158.0 / 265.0, 188.0 / 265.0, 218.0 / 265.0],
    [140.0 / 265.0, 150.0 / 265.0, 198.0 / 265.0],
    [140.0 / 265.0, 107.0 / 265.0, 177.0 / 265.0],
    [136.0 / 265.0, 65.0 / 265.0, 157.0 / 265.0],
    [110.0 / 265.0, 1.0 / 265.0, 107.0 / 265.0],
];

const BUPU9: [[f64; 3]; 9] = [
    [247.0 / 265.0, 252.0 / 265.0, 253.0 / 265.0],
    [224.0 / 265.0, 236.0 / 265.0, 244.0 / 265.0],
    [191.0 / 265.0, 211.0 / 265.0, 230.0 / 265.0],
    [158.0 / 265.0, 188.0 / 265.0, 218.0 / 265.0],
    [140.0 / 265.0, 150.0 / 265.0, 198.0 / 265.0],
    [140.0 / 265.0, 107.0 / 265.0, 177.0 / 265.0],
    [136.0 / 265.0, 65.0 / 265.0, 157.0 / 265.0],
    [129.0 / 265.0, 15.0 / 265.0, 124.0 / 265.0],
    [77.0 / 265.0, 0.0 / 265.0, 75.0 / 265.0],
];

const DARK23: [[f64; 3]; 3] = [
    [27.0 / 265.0, 158.0 / 265.0, 119.0 / 265.0],
    [217.0 / 265.0, 95.0 / 265.0, 2.0 / 265.0],
    [117.0 / 265.0, 112.0 / 265.0, 179.0 / 265.0],
];

const DARK24: [[f64; 3]; 4] = [
    [27.0 / 265.0, 158.0 / 265.0, 119.0 / 265.0],
    [217.0 / 265.0, 95.0 / 265.0, 2.0 / 265.0],
    [117.0 / 265.0, 112.0 / 265.0, 179.0 / 265.0],
    [231.0 / 265.0, 41.0 / 265.0, 138.0 / 265.0],
];

const DARK25: [[f64; 3]; 5] = [
    [27.0 / 265.0, 158.0 / 265.0, 119.0 / 265.0],
    [217.0 / 265.0, 95.0 / 265.0, 2.0 / 265.0],
    [117.0 / 265.0, 112.0 / 265.0, 179.0 / 265.0],
    [231.0 / 265.0, 41.0 / 265.0, 138.0 / 265.0],
    [102.0 / 265.0, 166.0 / 265.0, 30.0 / 265.0],
];

const DARK26: [[f64; 3]; 6] = [
    [27.0 / 265.0, 158.0 / 265.0, 119.0 / 265.0],
    [217.0 / 265.0, 95.0 / 265.0, 2.0 / 265.0],
    [117.0 / 265.0, 112.0 / 265.0, 179.0 / 265.0],
    [231.0 / 265.0, 41.0 / 265.0, 138.0 / 265.0],
    [102.0 / 265.0, 166.0 / 265.0, 30.0 / 265.0],
    [230.0 / 265.0, 171.0 / 265.0, 2.0 / 265.0],
];

const DARK27: [[f64; 3]; 7] = [
    [27.0 / 265.0, 158.0 / 265.0, 119.0 / 265.0],
    [217.0 / 265.0, 95.0 / 265.0, 2.0 / 265.0],
    [117.0 / 265.0, 112.0 / 265.0, 179.0 / 265.0],
    [231.0 / 265.0, 41.0 / 265.0, 138.0 / 265.0],
    [102.0 / 265.0, 166.0 / 265.0, 30.0 / 265.0],
    [230.0 / 265.0, 171.0 / 265.0, 2.0 / 265.0],
    [166.0 / 265.0, 118.0 / 265.0, 29.0 / 265.0],
];

const DARK28: [[f64; 3]; 8] = [
    [27.0 / 265.0, 158.0 / 265.0, 119.0 / 265.0],
    [217.0 / 265.0, 95.0 / 265.0, 2.0 / 265.0],
    [117.0 / 265.0, 112.0 / 265.0, 179.0 / 265.0],
    [231.0 / 265.0, 41.0 / 265.0, 138.0 / 265.0],
    [102.0 / 265.0, 166.0 / 265.0, 30.0 / 265.0],
    [230.0 / 265.0, 171.0 / 265.0, 2.0 / 265.0],
    [166.0 / 265.0, 118.0 / 265.0, 29.0 / 265.0],
    [102.0 / 265.0, 102.0 / 265.0, 102.0 / 265.0],
];

const GNBU3: [[f64; 3]; 3] = [
    [224.0 / 265.0, 243.0 / 265.0, 219.0 / 265.0],
    [168.0 / 265.0, 221.0 / 265.0, 181.0 / 265.0],
    [67.0 / 265.0, 162.0 / 265.0, 202.0 / 265.0],
];

const GNBU4: [[f64; 3]; 4] = [
    [240.0 / 265.0, 249.0 / 265.0, 232.0 / 265.0],
    [186.0 / 265.0, 228.0 / 265.0, 188.0 / 265.0],
    [123.0 / 265.0, 204.0 / 265.0, 196.0 / 265.0],
    [43.0 / 265.0, 140.0 / 265.0, 190.0 / 265.0],
];

const GNBU5: [[f64; 3]; 5] = [
    [240.0 / 265.0, 249.0 / 265.0, 232.0 / 265.0],
    [186.0 / 265.0, 228.0 / 265.0, 188.0 / 265.0],
    [123.0 / 265.0, 204.0 / 265.0, 196.0 / 265.0],
    [67.0 / 265.0, 162.0 / 265.0, 202.0 / 265.0],
    [8.0 / 265.0, 104.0 / 265.0, 172.0 / 265.0],
];

const GNBU6: [[f64; 3]; 6] = [
    [240.0 / 265.0, 249.0 / 265.0, 232.0 / 265.0],
    [204.0 / 265.0, 235.0 / 265.0, 197.0 / 265.0],
    [168.0 / 265.0, 221.0 / 265.0, 181.0 / 265.0],
    [123.0 / 265.0, 204.0 / 265.0, 196.0 / 265.0],
    [67.0 / 265.0, 162.0 / 265.0, 202.0 / 265.0],
    [8.0 / 265.0, 104.0 / 265.0, 172.0 / 265.0],
];

const GNBU7: [[f64; 3]; 7] = [
    [240.0 / 265.0, 249.0 / 265.0, 232.0 / 265.0],
    [204.0 / 265.0, 235.0 / 265.0, 197.0 / 265.0],
    [168.0 / 265.0, 221.0 / 265.0, 181.0 / 265.0],
    [123.0 / 265.0, 204.0 / 265.0, 196.0 / 265.0],
    [78.0 / 265.0, 179.0 / 265.0, 211.0 / 265.0],
    [43.0 / 265.0, 140.0 / 265.0, 190.0 / 265.0],
    [8.0 / 265.0, 88.0 / 265.0, 158.0 / 265.0],
];

const GNBU8: [[f64; 3]; 8] = [
    [247.0 / 265.0, 252.0 / 265.0, 240.0 / 265.0],
    [224.0 / 265.0, 243.0 / 265.0, 219.0 / 265.0],
    [204.0 / 265.0, 235.0 / 265.0, 197.0 / 265.0],
    [168.0 / 265.0, 221.0 / 265.0, 181.0 / 265.0],
    [123.0 / 265.0, 204.0 / 265.0, 196.0 / 265.0],
    [78.0 / 265.0, 179.0 / 265.0, 211.0 / 265.0],
    [43.0 / 265.0, 140.0 / 265.0, 190.0 / 265.0],
    [8.0 / 265.0, 88.0 / 265.0, 158.0 / 265.0],
];

const GNBU9: [[f64; 3]; 9] = [
    [247.0 / 265.0, 252.0 / 265.0, 240.0 / 265.0],
    [224.0 / 265.0, 243.0 / 265.0, 219.0 / 265.0],
    [204.0 / 265.0, 235.0 / 265.0, 197.0 / 265.0],
    [168.0 / 265.0, 221.0 / 265.0, 181.0 / 265.0],
    [123.0 / 265.0, 204.0 / 265.0, 196.0 / 265.0],
    [78.0 / 265.0, 179.0 / 265.0, 211.0 / 265.0],
    [43.0 / 265.0, 140.0 / 265.0, 190.0 / 265.0],
    [8.0 / 265.0, 104.0 / 265.0, 172.0 / 265.0],
    [8.0 / 265.0, 64.0 / 265.0, 129.0 / 265.0],
];

const GREENS3: [[f64; 3]; 3] = [
    [229.0 / 265.0, 245.0 / 265.0, 224.0 / 265.0],
    [161.0 / 265.0, 217.0 / 265.0, 155.0 / 265.0],
    [49.0 / 265.0, 163.0 / 265.0, 84.0 / 265.0],
];

const GREENS4: [[f64; 3]; 4] = [
    [237.0 / 265.0, 248.0 / 265.0, 233.0 / 265.0],
    [186.0 / 265.0, 228.0 / 265.0, 179.0 / 265.0],
    [116.0 / 265.0, 196.0 / 265.0, 118.0 / 265.0],
    [35.0 / 265.0, 139.0 / 265.0, 69.0 / 265.0],
];

const GREENS5: [[f64; 3]; 5] = [
    [237.0 / 265.0, 248.0 / 265.0, 233.0 / 265.0],
    [186.0 / 265.0, 228.0 / 265.0, 179.0 / 265.0],
    [116.0 / 265.0, 196.0 / 265.0, 118.0 / 265.0],
    [49.0 / 265.0, 163.0 / 265.0, 84.0 / 265.0],
    [0.0 / 265.0, 109.0 / 265.0, 44.0 / 265.0],
];

const GREENS6: [[f64; 3]; 6] = [
    [237.0 / 265.0, 248.0 / 265.0, 233.0 / 265.0],
    [199.0 / 265.0, 233.0 / 265.0, 192.0 / 265.0],
    [161.0 / 265.0, 217.0 / 265.0, 155.0 / 265.0],
    [116.0 / 265.0, 196.0 / 265.0, 118.0 / 265.0],
    [49.0 / 265.0, 163.0 / 265.0, 84.0 / 265.0],
    [0.0 / 265.0, 109.0 / 265.0, 44.0 / 265.0],
];

const GREENS7: [[f64; 3]; 7] = [
    [237.0 / 265.0, 248.0 / 265.0, 233.0 / 265.0],
    [199.0 / 265.0, 233.0 / 265.0, 192.0 / 265.0],
    [161.0 / 265.0, 217.0 / 265.0, 155.0 / 265.0],
    [116.0 / 265.0, 196.0 / 265.0, 118.0 / 265.0],
    [65.0 / 265.0, 171.0 / 265.0, 93.0 / 265.0],
    [35.0 / 265.0, 139.0 / 265.0, 69.0 / 265.0],
    [0.0 / 265.0, 90.0 / 265.0, 50.0 / 265.0],
];

const GREENS8: [[f64; 3]; 8] = [
    [247.0 / 265.0, 252.0 / 265.0, 245.0 / 265.0],
    [229.0 / 265.0, 245.0 / 265.0, 224.0 / 265.0],
    [199.0 / 265.0, 233.0 / 265.0, 192.0 / 265.0],
    [161.0 / 265.0, 217.0 / 265.0, 155.0 / 265.0],
    [116.0 / 265.0, 196.0 / 265.0, 118.0 / 265.0],
    [65.0 / 265.0, 171.0 / 265.0, 93.0 / 265.0],
    [35.0 / 265.0, 139.0 / 265.0, 69.0 / 265.0],
    [0.0 / 265.0, 90.0 / 265.0, 50.0 / 265.0],
];

const GREENS9: [[f64; 3]; 9] = [
    [247.0 / 265.0, 252.0 / 265.0, 245.0 / 265.0],
    [229.0 / 265.0, 245.0 / 265.0, 224.0 / 265.0],
    [199.0 / 265.0, 233.0 / 265.0, 192.0 / 265.0],
    [161.0 / 265.0, 217.0 / 265.0, 155.0 / 265.0],
    [116.0 / 265.0, 196.0 / 265.0, 118.0 / 265.0],
    [65.0 / 265.0, 171.0 / 265.0, 93.0 / 265.0],
    [35.0 / 265.0, 139.0 / 265.0, 69.0 / 265.0],
    [0.0 / 265.0, 109.0 / 265.0, 44.0 / 265.0],
    [0.0 / 265.0, 68.0 / 265.0, 27.0 / 265.0],
];

const GREYS3: [[f64; 3]; 3] = [
    [240.0 / 265.0, 240.0 / 265.0, 240.0 / 265.0],
    [189.0 / 265.0, 189.0 / 265.0, 189.0 / 265.0],
    [99.0 / 265.0, 99.0 / 265.0, 99.0 / 265.0],
];

const GREYS4: [[f64; 3]; 4] = [
    [247.0 / 265.0, 247.0 / 265.0, 247.0 / 265.0],
    [204.0 / 265.0, 204.0 / 265.0, 204.0 / 265.0],
    [150.0 / 265.0, 150.0 / 265.0, 150.0 / 265.0],
    [82.0 / 265.0, 82.0 / 265.0, 82.0 / 265.0],
];

const GREYS5: [[f64; 3]; 5] = [
    [247.0 / 265.0, 247.0 / 265.0, 247.0 / 265.0],
    [204.0 / 265.0, 204.0 / 265.0, 204.0 / 265.0],
    [150.0 / 265.0, 150.0 / 265.0, 150.0 / 265.0],
    [99.0 / 265.0, 99.0 / 265.0, 99.0 / 265.0],
    [37.0 / 265.0, 37.0 / 265.0, 37.0 / 265.0],
];

const GREYS6: [[f64; 3]; 6] = [
    [247.0 / 265.0, 247.0 / 265.0, 247.0 / 265.0],
    [217.0 / 265.0, 217.0 / 265.0, 217.0 / 265.0],
    [189.0 / 265.0, 189.0 / 265.0, 189.0 / 265.0],
    [150.0 / 265.0, 150.0 / 265.0, 150.0 / 265.0],
    [99.0 / 265.0, 99.0 / 265.0, 99.0 / 265.0],
    [37.0 / 265.0, 37.0 / 265.0, 37.0 / 265.0],
];

const GREYS7: [[f64; 3]; 7] = [
    [247.0 / 265.0, 247.0 / 265.0, 247.0 / 265.0],
    [217.0 / 265.0, 217.0 / 265.0, 217.0 / 265.0],
    [189.0 / 265.0, 189.0 / 265.0, 189.0 / 265.0],
    [150.0 / 265.0, 150.0 / 265.0, 150.0 / 265.0],
    [115.0 / 265.0, 115.0 / 265.0, 115.0 / 265.0],
    [82.0 / 265.0, 82.0 / 265.0, 82.0 / 265.0],
    [37.0 / 265.0, 37.0 / 265.0, 37.0 / 265.0],
];

const GREYS8: [[f64; 3]; 8] = [
    [255.0 / 265.0, 255.0 / 265.0, 255.0 / 265.0],
    [240.0 / 265.0, 240.0 / 265.0, 240.0 / 265.0],
    [217.0 / 265.0, 217.0 / 265.0, 217.0 / 265.0],
    [189.0 / 265.0, 189.0 / 265.0, 189.0 / 265.0],
    [150.0 / 265.0, 150.0 / 265.0, 150.0 / 265.0],
    [115.0 / 265.0, 115.0 / 265.0, 115.0 / 265.0],
    [82.0 / 265.0, 82.0 / 265.0, 82.0 / 265.0],
    [37.0 / 265.0, 37.0 / 265.0, 37.0 / 265.0],
];

const GREYS9: [[f64; 3]; 9] = [
    [255.0 / 265.0, 255.0 / 265.0, 255.0 / 265.0],
    [240.0 / 265.0, 240.0 / 265.0, 240.0 / 265.0],
    [217.0 / 265.0, 217.0 / 265.0, 217.0 / 265.0],
    [189.0 / 265.0, 189.0 / 265.0, 189.0 / 265.0],
    [150.0 / 265.0, 150.0 / 265.0, 150.0 / 265.0],
    [115.0 / 265.0, 115.0 / 265.0, 115.0 / 265.0],
    [82.0 / 265.0, 82.0 / 265.0, 82.0 / 265.0],
    [37.0 / 265.0, 37.0 / 265.0, 37.0 / 265.0],
    [0.0 / 265.0, 0.0 / 265.0, 0.0 / 265.0],
];

const ORANGES3: [[f64; 3]; 3] = [
    [254.0 / 265.0, 230.0 / 265.0, 206.0 / 265.0],
    [253.0 / 265.0, 174.0 / 265.0, 107.0 / 265.0],
    [230.0 / 265.0, 85.0 / 265.0, 13.0 / 265.0],
];

const ORANGES4: [[f64; 3]; 4] = [
    [254.0 / 265.0, 237.0 / 265.0, 222.0 / 265.0],
    [253.0 / 265.0, 190.0 / 265.0, 133.0 / 265.0],
    [253.0 / 265.0, 141.0 / 265.0, 60.0 / 265.0],
    [217.0 / 265.0, 71.0 / 265.0, 1.0 / 265.0],
];

const ORANGES5: [[f64; 3]; 5] = [
    [254.0 / 265.0, 237.0 / 265.0, 222.0 / 265.0],
    [253.0 / 265.0, 190.0 / 265.0, 133.0 / 265.0],
    [253.0 / 265.0, 141.0 / 265.0, 60.0 / 265.0],
    [230.0 / 265.0, 85.0 / 265.0, 13.0 / 265.0],
    [166.0 / 265.0, 54.0 / 265.0, 3.0 / 265.0],
];

const ORANGES6: [[f64; 3]; 6] = [
    [254.0 / 265.0, 237.0 / 265.0, 222.0 / 265.0],
    [253.0 / 265.0, 208.0 / 265.0, 162.0 / 265.0],
    [253.0 / 265.0, 174.0 / 265.0, 107.0 / 265.0],
    [253.0 / 265.0, 141.0 / 265.0, 60.0 / 265.0],
    [230.0 / 265.0, 85.0 / 265.0, 13.0 / 265.0],
    [166.0 / 265.0, 54.0 / 265.0, 3.0 / 265.0],
];

const ORANGES7: [[f64; 3]; 7] = [
    [254.0 / 265.0, 237.0 / 265.0, 222.0 / 265.0],
    [253.0 / 265.0, 208.0 / 265.0, 162.0 / 265.0],
    [253.0 / 265.0, 174.0 / 265.0, 107.0 / 265.0],
    [253.0 / 265.0, 141.0 / 265.0, 60.0 / 265.0],
    [241.0 / 265.0, 105.0 / 265.0, 19.0 / 265.0],
    [217.0 / 265.0, 72.0 / 265.0, 1.0 / 265.0],
    [140.0 / 265.0, 45.0 / 265.0, 4.0 / 265.0],
];

const ORANGES8: [[f64; 3]; 8] = [
    [255.0 / 265.0, 245.0 / 265.0, 235.0 / 265.0],
    [254.0 / 265.0, 230.0 / 265.0, 206.0 / 265.0],
    [253.0 / 265.0, 208.0 / 265.0, 162.0 / 265.0],
    [253.0 / 265.0, 174.0 / 265.0, 107.0 / 265.0],
    [253.0 / 265.0, 141.0 / 265.0, 60.0 / 265.0],
    [241.0 / 265.0, 105.0 / 265.0, 19.0 / 265.0],
    [217.0 / 265.0, 72.0 / 265.0, 1.0 / 265.0],
    [140.0 / 265.0, 45.0 / 265.0, 4.0 / 265.0],
];

const ORANGES9: [[f64; 3]; 9] = [
    [255.0 / 265.0, 245.0 / 265.0, 235.0 / 265.0],
    [254.0 / 265.0, 230.0 / 265.0, 206.0 / 265.0],
    [253.0 / 265.0, 208.0 / 265.0, 162.0 / 265.0],
    [253.0 / 265.0, 174.0 / 265.0, 107.0 / 265.0],
    [253.0 / 265.0, 141.0 / 265.0, 60.0 / 265.0],
    [241.0 / 265.0, 105.0 / 265.0, 19.0 / 265.0],
    [217.0 / 265.0, 72.0 / 265.0, 1.0 / 265.0],
    [166.0 / 265.0, 54.0 / 265.0, 3.0 / 265.0],
    [127.0 / 265.0, 39.0 / 265.0, 4.0 / 265.0],
];

const ORRD3: [[f64; 3]; 3] = [
    [254.0 / 265.0, 232.0 / 265.0, 200.0 / 265.0],
    [253.0 / 265.0, 187.0 / 265.0, 132.0 / 265.0],
    [227.0 / 265.0, 74.0 / 265.0, 51.0 / 265.0],
];

const ORRD4: [[f64; 3]; 4] = [
    [254.0 / 265.0, 240.0 / 265.0, 217.0 / 265.0],
    [253.0 / 265.0, 204.0 / 265.0, 138.0 / 265.0],
    [252.0 / 265.0, 141.0 / 265.0, 89.0 / 265.0],
    [215.0 / 265.0, 48.0 / 265.0, 31.0 / 265.0],
];

const ORRD5: [[f64; 3]; 5] = [
    [254.0 / 265.0, 240.0 / 265.0, 217.0 / 265.0],
    [253.0 / 265.0, 204.0 / 265.0, 138.0 / 265.0],
    [252.0 / 265.0, 141.0 / 265.0, 89.0 / 265.0],
    [227.0 / 265.0, 74.0 / 265.0, 51.0 / 265.0],
    [179.0 / 265.0, 0.0 / 265.0, 0.0 / 265.0],
];

const ORRD6: [[f64; 3]; 6] = [
    [254.0 / 265.0, 240.0 / 265.0, 217.0 / 265.0],
    [253.0 / 265.0, 212.0 / 265.0, 158.0 / 265.0],
    [253.0 / 265.0, 187.0 / 265.0, 132.0 / 265.0],
    [252.0 / 265.0, 141.0 / 265.0, 89.0 / 265.0],
    [227.0 / 265.0, 74.0 / 265.0, 51.0 / 265.0],
    [179.0 / 265.0, 0.0 / 265.0, 0.0 / 265.0],
];

const ORRD7: [[f64; 3]; 7] = [
    [254.0 / 265.0, 240.0 / 265.0, 217.0 / 265.0],
    [253.0 / 265.0, 212.0 / 265.0, 158.0 / 265.0],
    [253.0 / 265.0, 187.0 / 265.0, 132.0 / 265.0],
    [252.0 / 265.0, 141.0 / 265.0, 89.0 / 265.0],
    [239.0 / 265.0, 101.0 / 265.0, 72.0 / 265.0],
    [215.0 / 265.0, 48.0 / 265.0, 31.0 / 265.0],
    [153.0 / 265.0, 0.0 / 265.0, 0.0 / 265.0],
];

const ORRD8: [[f64; 3]; 8] = [
    [255.0 / 265.0, 247.0 / 265.0, 236.0 / 265.0],
    [254.0 / 265.0, 232.0 / 265.0, 200.0 / 265.0],
    [253.0 / 265.0, 212.0 / 265.0, 158.0 / 265.0],
    [253.0 / 265.0, 187.0 / 265.0, 132.0 / 265.0],
    [252.0 / 265.0, 141.0 / 265.0, 89.0 / 265.0],
    [239.0 / 265.0, 101.0 / 265.0, 72.0 / 265.0],
    [215.0 / 265.0, 48.0 / 265.0, 31.0 / 265.0],
    [153.0 / 265.0, 0.0 / 265.0, 0.0 / 265.0],
];

const ORRD9: [[f64; 3]; 9] = [
    [255.0 / 265.0, 247.0 / 265.0, 236.0 / 265.0],
    [254.0 / 265.0, 232.0 / 265.0, 200.0 / 265.0],
    [253.0 / 265.0, 212.0 / 265.0, 158.0 / 265.0],
    [253.0 / 265.0, 187.0 / 265.0, 132.0 / 265.0],
    [252.0 / 265.0, 141.0 / 265.0, 89.0 / 265.0],
    [239.0 / 265.0, 101.0 / 265.0, 72.0 / 265.0],
    [215.0 / 265.0, 48.0 / 265.0, 31.0 / 265.0],
    [179.0 / 265.0, 0.0 / 265.0, 0.0 / 265.0],
    [127.0 / 265.0, 0.0 / 265.0, 0.0 / 265.0],
];

const PAIRED3: [[f64; 3]; 3] = [
    [166.0 / 265.0, 206.0 / 265.0, 227.0 / 265.0],
    [31.0 / 265.0, 120.0 / 265.0, 180.0 / 265.0],
    [178.0 / 265.0, 223.0 / 265.0, 138.0 / 265.0],
];

const PAIRED4: [[f64; 3]; 4] = [
    [166.0 / 265.0, 206.0 / 265.0, 227.0 / 265.0],
    [31.0 / 265.0, 120.0 / 265.0, 180.0 / 265.0],
    [178.0 / 265.0, 223.0 / 265.0, 138.0 / 265.0],
    [51.0 / 265.0, 160.0 / 265.0, 44.0 / 265.0],
];

const PAIRED5: [[f64; 3]; 5] = [
    [166.0 / 265.0, 206.0 / 265.0, 227.0 / 265.0],
    [31.0 / 265.0, 120.0 / 265.0, 180.0 / 265.0],
    [178.0 / 265.0, 223.0 / 265.0, 138.0 / 265.0],
    [51.0 / 265.0, 160.0 / 265.0, 44.0 / 265.0],
    [251.0 / 265.0, 154.0 / 265.0, 153.0 / 265.0],
];

const PAIRED6: [[f64; 3]; 6] = [
    [166.0 / 265.0, 206.0 / 265.0, 227.0 / 265.0],
    [31.0 / 265.0, 120.0 / 265.0, 180.0 / 265.0],
    [178.0 / 265.0, 223.0 / 265.0, 138.0 / 265.0],
    [51.0 / 265.0, 160.0 / 265.0, 44.0 / 265.0],
    [251.0 / 265.0, 154.0 / 265.0, 153.0 / 265.0],
    [227.0 / 265.0, 26.0 / 265.0, 28.0 / 265.0],
];

const PAIRED7: [[f64; 3]; 7] = [
    [166.0 / 265.0, 206.0 / 265.0, 227.0 / 265.0],
    [31.0 / 265.0, 120.0 / 265.0, 180.0 / 265.0],
    [178.0 / 265.0, 223.0 / 265.0, 138.0 / 265.0],
    [51.0 / 265.0, 160.0 / 265.0, 44.0 / 265.0],
    [251.0 / 265.0, 154.0 / 265.0, 153.0 / 265.0],
    [227.0 / 265.0, 26.0 / 265.0, 28.0 / 265.0],
    [253.0 / 265.0, 191.0 / 265.0, 111.0 / 265.0],
];

const PAIRED8: [[f64; 3]; 8] = [
    [166.0 / 265.0, 206.0 / 265.0, 227.0 / 265.0],
    [31.0 / 265.0, 120.0 / 265.0, 180.0 / 265.0],
    [178.0 / 265.0, 223.0 / 265.0, 138.0 / 265.0],
    [51.0 / 265.0, 160.0 / 265.0, 44.0 / 265.0],
    [251.0 / 265.0, 154.0 / 265.0, 153.0 / 265.0],
    [227.0 / 265.0, 26.0 / 265.0, 28.0 / 265.0],
    [253.0 / 265.0, 191.0 / 265.0, 111.0 / 265.0],
    [255.0 / 265.0, 127.0 / 265.0, 0.0 / 265.0],
];

const PAIRED9: [[f64; 3]; 9] = [
    [166.0 / 265.0, 206.0 / 265.0, 227.0 / 265.0],
    [31.0 / 265.0, 120.0 / 265.0, 180.0 / 265.0],
    [178.0 / 265.0, 223.0 / 265.0, 138.0 / 265.0],
    [51.0 / 265.0, 160.0 / 265.0, 44.0 / 265.0],
    [251.0 / 265.0, 154.0 / 265.0, 153.0 / 265.0],
    [227.0 / 265.0, 26.0 / 265.0, 28.0 / 265.0],
    [253.0 / 265.0, 191.0 / 265.0, 111.0 / 265.0],
    [255.0 / 265.0, 127.0 / 265.0, 0.0 / 265.0],
    [202.0 / 265.0, 178.0 / 265.0, 214.0 / 265.0],
];

const PAIRED10: [[f64; 3]; 10] = [
    [166.0 / 265.0, 206.0 / 265.0, 227.0 / 265.0],
    [31.0 / 265.0, 120.0 / 265.0, 180.0 / 265.0],
    [178.0 / 265.0, 223.0 / 265.0, 138.0 / 265.0],
    [51.0 / 265.0, 160.0 / 265.0, 44.0 / 265.0],
    [251.0 / 265.0, 154.0 / 265.0, 153.0 / 265.0],
    [227.0 / 265.0, 26.0 / 265.0, 28.0 / 265.0],
    [253.0 / 265.0, 191.0 / 265.0, 111.0 / 265.0],
    [255.0 / 265.0, 127.0 / 265.0, 0.0 / 265.0],
    [202.0 / 265.0, 178.0 / 265.0, 214.0 / 265.0],
    [106.0 / 265.0, 61.0 / 265.0, 154.0 / 265.0],
];

const PAIRED11: [[f64; 3]; 11] = [
    [166.0 / 265.0, 206.0 / 265.0, 227.0 / 265.0],
    [31.0 / 265.0, 120.0 / 265.0, 180.0 / 265.0],
    [178.0 / 265.0, 223.0 / 265.0, 138.0 / 265.0],
    [51.0 / 265.0, 160.0 / 265.0, 44.0 / 265.0],
    [251.0 / 265.0, 154.0 / 265.0, 153.0 / 265.0],
    [227.0 / 265.0, 26.0 / 265.0, 28.0 / 265.0],
    [253.0 / 265.0, 191.0 / 265.0, 111.0 / 265.0],
    [255.0 / 265.0, 127.0 / 265.0, 0.0 / 265.0],
    [202.0 / 265.0, 178.0 / 265.0, 214.0 / 265.0],
    [106.0 / 265.0, 61.0 / 265.0, 154.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 153.0 / 265.0],
];

const PAIRED12: [[f64; 3]; 12] = [
    [166.0 / 265.0, 206.0 / 265.0, 227.0 / 265.0],
    [31.0 / 265.0, 120.0 / 265.0, 180.0 / 265.0],
    [178.0 / 265.0, 223.0 / 265.0, 138.0 / 265.0],
    [51.0 / 265.0, 160.0 / 265.0, 44.0 / 265.0],
    [251.0 / 265.0, 154.0 / 265.0, 153.0 / 265.0],
    [227.0 / 265.0, 26.0 / 265.0, 28.0 / 265.0],
    [253.0 / 265.0, 191.0 / 265.0, 111.0 / 265.0],
    [255.0 / 265.0, 127.0 / 265.0, 0.0 / 265.0],
    [202.0 / 265.0, 178.0 / 265.0, 214.0 / 265.0],
    [106.0 / 265.0, 61.0 / 265.0, 154.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 153.0 / 265.0],
    [177.0 / 265.0, 89.0 / 265.0, 40.0 / 265.0],
];

const PASTEL13: [[f64; 3]; 3] = [
    [251.0 / 265.0, 180.0 / 265.0, 174.0 / 265.0],
    [179.0 / 265.0, 205.0 / 265.0, 227.0 / 265.0],
    [204.0 / 265.0, 235.0 / 265.0, 197.0 / 265.0],
];

const PASTEL14: [[f64; 3]; 4] = [
    [251.0 / 265.0, 180.0 / 265.0, 174.0 / 265.0],
    [179.0 / 265.0, 205.0 / 265.0, 227.0 / 265.0],
    [204.0 / 265.0, 235.0 / 265.0, 197.0 / 265.0],
    [222.0 / 265.0, 203.0 / 265.0, 228.0 / 265.0],
];

const PASTEL15: [[f64; 3]; 5] = [
    [251.0 / 265.0, 180.0 / 265.0, 174.0 / 265.0],
    [179.0 / 265.0, 205.0 / 265.0, 227.0 / 265.0],
    [204.0 / 265.0, 235.0 / 265.0, 197.0 / 265.0],
    [222.0 / 265.0, 203.0 / 265.0, 228.0 / 265.0],
    [254.0 / 265.0, 217.0 / 265.0, 166.0 / 265.0],
];

const PASTEL16: [[f64; 3]; 6] = [
    [251.0 / 265.0, 180.0 / 265.0, 174.0 / 265.0],
    [179.0 / 265.0, 205.0 / 265.0, 227.0 / 265.0],
    [204.0 / 265.0, 235.0 / 265.0, 197.0 / 265.0],
    [222.0 / 265.0, 203.0 / 265.0, 228.0 / 265.0],
    [254.0 / 265.0, 217.0 / 265.0, 166.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 204.0 / 265.0],
];

const PASTEL17: [[f64; 3]; 7] = [
    [251.0 / 265.0, 180.0 / 265.0, 174.0 / 265.0],
    [179.0 / 265.0, 205.0 / 265.0, 227.0 / 265.0],
    [204.0 / 265.0, 235.0 / 265.0, 197.0 / 265.0],
    [222.0 / 265.0, 203.0 / 265.0, 228.0 / 265.0],
    [254.0 / 265.0, 217.0 / 265.0, 166.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 204.0 / 265.0],
    [229.0 / 265.0, 216.0 / 265.0, 189.0 / 265.0],
];

const PASTEL18: [[f64; 3]; 8] = [
    [251.0 / 265.0, 180.0 / 265.0, 174.0 / 265.0],
    [179.0 / 265.0, 205.0 / 265.0, 227.0 / 265.0],
    [204.0 / 265.0, 235.0 / 265.0, 197.0 / 265.0],
    [222.0 / 265.0, 203.0 / 265.0, 228.0 / 265.0],
    [254.0 / 265.0, 217.0 / 265.0, 166.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 204.0 / 265.0],
    [229.0 / 265.0, 216.0 / 265.0, 189.0 / 265.0],
    [253.0 / 265.0, 218.0 / 265.0, 236.0 / 265.0],
];

const PASTEL19: [[f64; 3]; 9] = [
    [251.0 / 265.0, 180.0 / 265.0, 174.0 / 265.0],
    [179.0 / 265.0, 205.0 / 265.0, 227.0 / 265.0],
    [204.0 / 265.0, 235.0 / 265.0, 197.0 / 265.0],
    [222.0 / 265.0, 203.0 / 265.0, 228.0 / 265.0],
    [254.0 / 265.0, 217.0 / 265.0, 166.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 204.0 / 265.0],
    [229.0 / 265.0, 216.0 / 265.0, 189.0 / 265.0],
    [253.0 / 265.0, 218.0 / 265.0, 236.0 / 265.0],
    [242.0 / 265.0, 242.0 / 265.0, 242.0 / 265.0],
];

const PASTEL23: [[f64; 3]; 3] = [
    [179.0 / 265.0, 226.0 / 265.0, 205.0 / 265.0],
    [253.0 / 265.0, 205.0 / 265.0, 172.0 / 265.0],
    [203.0 / 265.0, 213.0 / 265.0, 232.0 / 265.0],
];

const PASTEL24: [[f64; 3]; 4] = [
    [179.0 / 265.0, 226.0 / 265.0, 205.0 / 265.0],
    [253.0 / 265.0, 205.0 / 265.0, 172.0 / 265.0],
    [203.0 / 265.0, 213.0 / 265.0, 232.0 / 265.0],
    [244.0 / 265.0, 202.0 / 265.0, 228.0 / 265.0],
];

const PASTEL25: [[f64; 3]; 5] = [
    [179.0 / 265.0, 226.0 / 265.0, 205.0 / 265.0],
    [253.0 / 265.0, 205.0 / 265.0, 172.0 / 265.0],
    [203.0 / 265.0, 213.0 / 265.0, 232.0 / 265.0],
    [244.0 / 265.0, 202.0 / 265.0, 228.0 / 265.0],
    [230.0 / 265.0, 245.0 / 265.0, 201.0 / 265.0],
];

const PASTEL26: [[f64; 3]; 6] = [
    [179.0 / 265.0, 226.0 / 265.0, 205.0 / 265.0],
    [253.0 / 265.0, 205.0 / 265.0, 172.0 / 265.0],
    [203.0 / 265.0, 213.0 / 265.0, 232.0 / 265.0],
    [244.0 / 265.0, 202.0 / 265.0, 228.0 / 265.0],
    [230.0 / 265.0, 245.0 / 265.0, 201.0 / 265.0],
    [255.0 / 265.0, 242.0 / 265.0, 174.0 / 265.0],
];

const PASTEL27: [[f64; 3]; 7] = [
    [179.0 / 265.0, 226.0 / 265.0, 205.0 / 265.0],
    [253.0 / 265.0, 205.0 / 265.0, 172.0 / 265.0],
    [203.0 / 265.0, 213.0 / 265.0, 232.0 / 265.0],
    [244.0 / 265.0, 202.0 / 265.0, 228.0 / 265.0],
    [230.0 / 265.0, 245.0 / 265.0, 201.0 / 265.0],
    [255.0 / 265.0, 242.0 / 265.0, 174.0 / 265.0],
    [241.0 / 265.0, 226.0 / 265.0, 204.0 / 265.0],
];

const PASTEL28: [[f64; 3]; 8] = [
    [179.0 / 265.0, 226.0 / 265.0, 205.0 / 265.0],
    [253.0 / 265.0, 205.0 / 265.0, 172.0 / 265.0],
    [203.0 / 265.0, 213.0 / 265.0, 232.0 / 265.0],
    [244.0 / 265.0, 202.0 / 265.0, 228.0 / 265.0],
    [230.0 / 265.0, 245.0 / 265.0, 201.0 / 265.0],
    [255.0 / 265.0, 242.0 / 265.0, 174.0 / 265.0],
    [241.0 / 265.0, 226.0 / 265.0, 204.0 / 265.0],
    [204.0 / 265.0, 204.0 / 265.0, 204.0 / 265.0],
];

const PIYG3: [[f64; 3]; 3] = [
    [233.0 / 265.0, 163.0 / 265.0, 201.0 / 265.0],
    [247.0 / 265.0, 247.0 / 265.0, 247.0 / 265.0],
    [161.0 / 265.0, 215.0 / 265.0, 106.0 / 265.0],
];

const PIYG4: [[f64; 3]; 4] = [
    [208.0 / 265.0, 28.0 / 265.0, 139.0 / 265.0],
    [241.0 / 265.0, 182.0 / 265.0, 218.0 / 265.0],
    [184.0 / 265.0, 225.0 / 265.0, 134.0 / 265.0],
    [77.0 / 265.0, 172.0 / 265.0, 38.0 / 265.0],
];

const PIYG5: [[f64; 3]; 5] = [
    [208.0 / 265.0, 28.0 / 265.0, 139.0 / 265.0],
    [241.0 / 265.0, 182.0 / 265.0, 218.0 / 265.0],
    [247.0 / 265.0, 247.0 / 265.0, 247.0 / 265.0],
    [184.0 / 265.0, 225.0 / 265.0, 134.0 / 265.0],
    [77.0 / 265.0, 172.0 / 265.0, 38.0 / 265.0],
];

const PIYG6: [[f64; 3]; 6] = [
    [197.0 / 265.0, 27.0 / 265.0, 125.0 / 265.0],
    [233.0 / 265.0, 163.0 / 265.0, 201.0 / 265.0],
    [253.0 / 265.0, 224.0 / 265.0, 239.0 / 265.0],
    [230.0 / 265.0, 245.0 / 265.0, 208.0 / 265.0],
    [161.0 / 265.0, 215.0 / 265.0, 106.0 / 265.0],
    [77.0 / 265.0, 146.0 / 265.0, 33.0 / 265.0],
];

const PIYG7: [[f64; 3]; 7] = [
    [197.0 / 265.0, 27.0 / 265.0, 125.0 / 265.0],
    [233.0 / 265.0, 163.0 / 265.0, 201.0 / 265.0],
    [253.0 / 265.0, 224.0 / 265.0, 239.0 / 265.0],
    [247.0 / 265.0, 247.0 / 265.0, 247.0 / 265.0],
    [230.0 / 265.0, 245.0 / 265.0, 208.0 / 265.0],
    [161.0 / 265.0, 215.0 / 265.0, 106.0 / 265.0],
    [77.0 / 265.0, 146.0 / 265.0, 33.0 / 265.0],
];

const PIYG8: [[f64; 3]; 8] = [
    [197.0 / 265.0, 27.0 / 265.0, 125.0 / 265.0],
    [222.0 / 265.0, 119.0 / 265.0, 174.0 / 265.0],
    [241.0 / 265.0, 182.0 / 265.0, 218.0 / 265.0],
    [253.0 / 265.0, 224.0 / 265.0, 239.0 / 265.0],
    [230.0 / 265.0, 245.0 / 265.0, 208.0 / 265.0],
    [184.0 / 265.0, 225.0 / 265.0, 134.0 / 265.0],
    [127.0 / 265.0, 188.0 / 265.0, 65.0 / 265.0],
    [77.0 / 265.0, 146.0 / 265.0, 33.0 / 265.0],
];

const PIYG9: [[f64; 3]; 9] = [
    [197.0 / 265.0, 27.0 / 265.0, 125.0 / 265.0],
    [222.0 / 265.0, 119.0 / 265.0, 174.0 / 265.0],
    [241.0 / 265.0, 182.0 / 265.0, 218.0 / 265.0],
    [253.0 / 265.0, 224.0 / 265.0, 239.0 / 265.0],
    [247.0 / 265.0, 247.0 / 265.0, 247.0 / 265.0],
    [230.0 / 265.0, 245.0 / 265.0, 208.0 / 265.0],
    [184.0 / 265.0, 225.0 / 265.0, 134.0 / 265.0],
    [127.0 / 265.0, 188.0 / 265.0, 65.0 / 265.0],
    [77.0 / 265.0, 146.0 / 265.0, 33.0 / 265.0],
];

const PIYG10: [[f64; 3]; 10] = [
    [142.0 / 265.0, 1.0 / 265.0, 82.0 / 265.0],
    [197.0 / 265.0, 27.0 / 265.0, 125.0 / 265.0],
    [222.0 / 265.0, 119.0 / 265.0, 174.0 / 265.0],
    [241.0 / 265.0, 182.0 / 265.0, 218.0 / 265.0],
    [253.0 / 265.0, 224.0 / 265.0, 239.0 / 265.0],
    [230.0 / 265.0, 245.0 / 265.0, 208.0 / 265.0],
    [184.0 / 265.0, 225.0 / 265.0, 134.0 / 265.0],
    [127.0 / 265.0, 188.0 / 265.0, 65.0 / 265.0],
    [77.0 / 265.0, 146.0 / 265.0, 33.0 / 265.0],
    [39.0 / 265.0, 100.0 / 265.0, 25.0 / 265.0],
];

const PIYG11: [[f64; 3]; 11] = [
    [142.0 / 265.0, 1.0 / 265.0, 82.0 / 265.0],
    [197.0 / 265.0, 27.0 / 265.0, 125.0 / 265.0],
    [222.0 / 265.0, 119.0 / 265.0, 174.0 / 265.0],
    [241.0 / 265.0, 182.0 / 265.0, 218.0 / 265.0],
    [253.0 / 265.0, 224.0 / 265.0, 239.0 / 265.0],
    [247.0 / 265.0, 247.0 / 265.0, 247.0 / 265.0],
    [230.0 / 265.0, 245.0 / 265.0, 208.0 / 265.0],
    [184.0 / 265.0, 225.0 / 265.0, 134.0 / 265.0],
    [127.0 / 265.0, 188.0 / 265.0, 65.0 / 265.0],
    [77.0 / 265.0, 146.0 / 265.0, 33.0 / 265.0],
    [39.0 / 265.0, 100.0 / 265.0, 25.0 / 265.0],
];

const PRGN3: [[f64; 3]; 3] = [
    [175.0 / 265.0, 141.0 / 265.0, 195.0 / 265.0],
    [247.0 / 265.0, 247.0 / 265.0, 247.0 / 265.0],
    [127.0 / 265.0, 191.0 / 265.0, 123.0 / 265.0],
];

const PRGN4: [[f64; 3]; 4] = [
    [123.0 / 265.0, 50.0 / 265.0, 148.0 / 265.0],
    [194.0 / 265.0, 165.0 / 265.0, 207.0 / 265.0],
    [166.0 / 265.0, 219.0 / 265.0, 160.0 / 265.0],
    [0.0 / 265.0, 136.0 / 265.0, 55.0 / 265.0],
];

const PRGN5: [[f64; 3]; 5] = [
    [123.0 / 265.0, 50.0 / 265.0, 148.0 / 265.0],
    [194.0 / 265.0, 165.0 / 265.0, 207.0 / 265.0],
    [247.0 / 265.0, 247.0 / 265.0, 247.0 / 265.0],
    [166.0 / 265.0, 219.0 / 265.0, 160.0 / 265.0],
    [0.0 / 265.0, 136.0 / 265.0, 55.0 / 265.0],
];

const PRGN6: [[f64; 3]; 6] = [
    [118.0 / 265.0, 42.0 / 265.0, 131.0 / 265.0],
    [175.0 / 265.0, 141.0 / 265.0, 195.0 / 265.0],
    [231.0 / 265.0, 212.0 / 265.0, 232.0 / 265.0],
    [217.0 / 265.0, 240.0 / 265.0, 211.0 / 265.0],
    [127.0 / 265.0, 191.0 / 265.0, 123.0 / 265.0],
    [27.0 / 265.0, 120.0 / 265.0, 55.0 / 265.0],
];

const PRGN7: [[f64; 3]; 7] = [
    [118.0 / 265.0, 42.0 / 265.0, 131.0 / 265.0],
    [175.0 / 265.0, 141.0 / 265.0, 195.0 / 265.0],
    [231.0 / 265.0, 212.0 / 265.0, 232.0 / 265.0],
    [247.0 / 265.0, 247.0 / 265.0, 247.0 / 265.0],
    [217.0 / 265.0, 240.0 / 265.0, 211.0 / 265.0],
    [127.0 / 265.0, 191.0 / 265.0, 123.0 / 265.0],
    [27.0 / 265.0, 120.0 / 265.0, 55.0 / 265.0],
];

const PRGN8: [[f64; 3]; 8] = [
    [118.0 / 265.0, 42.0 / 265.0, 131.0 / 265.0],
    [153.0 / 265.0, 112.0 / 265.0, 171.0 / 265.0],
    [194.0 / 265.0, 165.0 / 265.0, 207.0 / 265.0],
    [231.0 / 265.0, 212.0 / 265.0, 232.0 / 265.0],
    [217.0 / 265.0, 240.0 / 265.0, 211.0 / 265.0],
    [166.0 / 265.0, 219.0 / 265.0, 160.0 / 265.0],
    [90.0 / 265.0, 174.0 / 265.0, 97.0 / 265.0],
    [27.0 / 265.0, 120.0 / 265.0, 55.0 / 265.0],
];

const PRGN9: [[f64; 3]; 9] = [
    [118.0 / 265.0, 42.0 / 265.0, 131.0 / 265.0],
    [153.0 / 265.0, 112.0 / 265.0, 171.0 / 265.0],
    [194.0 / 265.0, 165.0 / 265.0, 207.0 / 265.0],
    [231.0 / 265.0, 212.0 / 265.0, 232.0 / 265.0],
    [247.0 / 265.0, 247.0 / 265.0, 247.0 / 265.0],
    [217.0 / 265.0, 240.0 / 265.0, 211.0 / 265.0],
    [166.0 / 265.0, 219.0 / 265.0, 160.0 / 265.0],
    [90.0 / 265.0, 174.0 / 265.0, 97.0 / 265.0],
    [27.0 / 265.0, 120.0 / 265.0, 55.0 / 265.0],
];

const PRGN10: [[f64; 3]; 10] = [
    [64.0 / 265.0, 0.0 / 265.0, 75.0 / 265.0],
    [118.0 / 265.0, 42.0 / 265.0, 131.0 / 265.0],
    [153.0 / 265.0, 112.0 / 265.0, 171.0 / 265.0],
    [194.0 / 265.0, 165.0 / 265.0, 207.0 / 265.0],
    [231.0 / 265.0, 212.0 / 265.0, 232.0 / 265.0],
    [217.0 / 265.0, 240.0 / 265.0, 211.0 / 265.0],
    [166.0 / 265.0, 219.0 / 265.0, 160.0 / 265.0],
    [90.0 / 265.0, 174.0 / 265.0, 97.0 / 265.0],
    [27.0 / 265.0, 120.0 / 265.0, 55.0 / 265.0],
    [0.0 / 265.0, 68.0 / 265.0, 27.0 / 265.0],
];

const PRGN11: [[f64; 3]; 11] = [
    [64.0 / 265.0, 0.0 / 265.0, 75.0 / 265.0],
    [118.0 / 265.0, 42.0 / 265.0, 131.0 / 265.0],
    [153.0 / 265.0, 112.0 / 265.0, 171.0 / 265.0],
    [194.0 / 265.0, 165.0 / 265.0, 207.0 / 265.0],
    [231.0 / 265.0, 212.0 / 265.0, 232.0 / 265.0],
    [247.0 / 265.0, 247.0 / 265.0, 247.0 / 265.0],
    [217.0 / 265.0, 240.0 / 265.0, 211.0 / 265.0],
    [166.0 / 265.0, 219.0 / 265.0, 160.0 / 265.0],
    [90.0 / 265.0, 174.0 / 265.0, 97.0 / 265.0],
    [27.0 / 265.0, 120.0 / 265.0, 55.0 / 265.0],
    [0.0 / 265.0, 68.0 / 265.0, 27.0 / 265.0],
];

const PUBU3: [[f64; 3]; 3] = [
    [236.0 / 265.0, 231.0 / 265.0, 242.0 / 265.0],
    [166.0 / 265.0, 189.0 / 265.0, 219.0 / 265.0],
    [43.0 / 265.0, 140.0 / 265.0, 190.0 / 265.0],
];

const PUBU4: [[f64; 3]; 4] = [
    [241.0 / 265.0, 238.0 / 265.0, 246.0 / 265.0],
    [189.0 / 265.0, 201.0 / 265.0, 225.0 / 265.0],
    [116.0 / 265.0, 169.0 / 265.0, 207.0 / 265.0],
    [5.0 / 265.0, 112.0 / 265.0, 176.0 / 265.0],
];

const PUBU5: [[f64; 3]; 5] = [
    [241.0 / 265.0, 238.0 / 265.0, 246.0 / 265.0],
    [189.0 / 265.0, 201.0 / 265.0, 225.0 / 265.0],
    [116.0 / 265.0, 169.0 / 265.0, 207.0 / 265.0],
    [43.0 / 265.0, 140.0 / 265.0, 190.0 / 265.0],
    [4.0 / 265.0, 90.0 / 265.0, 141.0 / 265.0],
];

const PUBU6: [[f64; 3]; 6] = [
    [241.0 / 265.0, 238.0 / 265.0, 246.0 / 265.0],
    [208.0 / 265.0, 209.0 / 265.0, 230.0 / 265.0],
    [166.0 / 265.0, 189.0 / 265.0, 219.0 / 265.0],
    [116.0 / 265.0, 169.0 / 265.0, 207.0 / 265.0],
    [43.0 / 265.0, 140.0 / 265.0, 190.0 / 265.0],
    [4.0 / 265.0, 90.0 / 265.0, 141.0 / 265.0],
];

const PUBU7: [[f64; 3]; 7] = [
    [241.0 / 265.0, 238.0 / 265.0, 246.0 / 265.0],
    [208.0 / 265.0, 209.0 / 265.0, 230.0 / 265.0],
    [166.0 / 265.0, 189.0 / 265.0, 219.0 / 265.0],
    [116.0 / 265.0, 169.0 / 265.0, 207.0 / 265.0],
    [54.0 / 265.0, 144.0 / 265.0, 192.0 / 265.0],
    [5.0 / 265.0, 112.0 / 265.0, 176.0 / 265.0],
    [3.0 / 265.0, 78.0 / 265.0, 123.0 / 265.0],
];

const PUBU8: [[f64; 3]; 8] = [
    [255.0 / 265.0, 247.0 / 265.0, 251.0 / 265.0],
    [236.0 / 265.0, 231.0 / 265.0, 242.0 / 265.0],
    [208.0 / 265.0, 209.0 / 265.0, 230.0 / 265.0],
    [166.0 / 265.0, 189.0 / 265.0, 219.0 / 265.0],
    [116.0 / 265.0, 169.0 / 265.0, 207.0 / 265.0],
    [54.0 / 265.0, 144.0 / 265.0, 192.0 / 265.0],
    [5.0 / 265.0, 112.0 / 265.0, 176.0 / 265.0],
    [3.0 / 265.0, 78.0 / 265.0, 123.0 / 265.0],
];

const PUBU9: [[f64; 3]; 9] = [
    [255.0 / 265.0, 247.0 / 265.0, 251.0 / 265.0],
    [236.0 / 265.0, 231.0 / 265.0, 242.0 / 265.0],
    [208.0 / 265.0, 209.0 / 265.0, 230.0 / 265.0],
    [166.0 / 265.0, 189.0 / 265.0, 219.0 / 265.0],
    [116.0 / 265.0, 169.0 / 265.0, 207.0 / 265.0],
    [54.0 / 265.0, 144.0 / 265.0, 192.0 / 265.0],
    [5.0 / 265.0, 112.0 / 265.0, 176.0 / 265.0],
    [4.0 / 265.0, 90.0 / 265.0, 141.0 / 265.0],
    [2.0 / 265.0, 56.0 / 265.0, 88.0 / 265.0],
];

const PUBUGN3: [[f64; 3]; 3] = [
    [236.0 / 265.0, 226.0 / 265.0, 240.0 / 265.0],
    [166.0 / 265.0, 189.0 / 265.0, 219.0 / 265.0],
    [28.0 / 265.0, 144.0 / 265.0, 153.0 / 265.0],
];

const PUBUGN4: [[f64; 3]; 4] = [
    [246.0 / 265.0, 239.0 / 265.0, 247.0 / 265.0],
    [189.0 / 265.0, 201.0 / 265.0, 225.0 / 265.0],
    [103.0 / 265.0, 169.0 / 265.0, 207.0 / 265.0],
    [2.0 / 265.0, 129.0 / 265.0, 138.0 / 265.0],
];

const PUBUGN5: [[f64; 3]; 5] = [
    [246.0 / 265.0, 239.0 / 265.0, 247.0 / 265.0],
    [189.0 / 265.0, 201.0 / 265.0, 225.0 / 265.0],
    [103.0 / 265.0, 169.0 / 265.0, 207.0 / 265.0],
    [28.0 / 265.0, 144.0 / 265.0, 153.0 / 265.0],
    [1.0 / 265.0, 108.0 / 265.0, 89.0 / 265.0],
];

const PUBUGN6: [[f64; 3]; 6] = [
    [246.0 / 265.0, 239.0 / 265.0, 247.0 / 265.0],
    [208.0 / 265.0, 209.0 / 265.0, 230.0 / 265.0],
    [166.0 / 265.0, 189.0 / 265.0, 219.0 / 265.0],
    [103.0 / 265.0, 169.0 / 265.0, 207.0 / 265.0],
    [28.0 / 265.0, 144.0 / 265.0, 153.0 / 265.0],
    [1.0 / 265.0, 108.0 / 265.0, 89.0 / 265.0],
];

const PUBUGN7: [[f64; 3]; 7] = [
    [246.0 / 265.0, 239.0 / 265.0, 247.0 / 265.0],
    [208.0 / 265.0, 209.0 / 265.0, 230.0 / 265.0],
    [166.0 / 265.0, 189.0 / 265.0, 219.0 / 265.0],
    [103.0 / 265.0, 169.0 / 265.0, 207.0 / 265.0],
    [54.0 / 265.0, 144.0 / 265.0, 192.0 / 265.0],
    [2.0 / 265.0, 129.0 / 265.0, 138.0 / 265.0],
    [1.0 / 265.0, 100.0 / 265.0, 80.0 / 265.0],
];

const PUBUGN8: [[f64; 3]; 8] = [
    [255.0 / 265.0, 247.0 / 265.0, 251.0 / 265.0],
    [236.0 / 265.0, 226.0 / 265.0, 240.0 / 265.0],
    [208.0 / 265.0, 209.0 / 265.0, 230.0 / 265.0],
    [166.0 / 265.0, 189.0 / 265.0, 219.0 / 265.0],
    [103.0 / 265.0, 169.0 / 265.0, 207.0 / 265.0],
    [54.0 / 265.0, 144.0 / 265.0, 192.0 / 265.0],
    [2.0 / 265.0, 129.0 / 265.0, 138.0 / 265.0],
    [1.0 / 265.0, 100.0 / 265.0, 80.0 / 265.0],
];

const PUBUGN9: [[f64; 3]; 9] = [
    [255.0 / 265.0, 247.0 / 265.0, 251.0 / 265.0],
    [236.0 / 265.0, 226.0 / 265.0, 240.0 / 265.0],
    [208.0 / 265.0, 209.0 / 265.0, 230.0 / 265.0],
    [166.0 / 265.0, 189.0 / 265.0, 219.0 / 265.0],
    [103.0 / 265.0, 169.0 / 265.0, 207.0 / 265.0],
    [54.0 / 265.0, 144.0 / 265.0, 192.0 / 265.0],
    [2.0 / 265.0, 129.0 / 265.0, 138.0 / 265.0],
    [1.0 / 265.0, 108.0 / 265.0, 89.0 / 265.0],
    [1.0 / 265.0, 70.0 / 265.0, 54.0 / 265.0],
];

const PUOR3: [[f64; 3]; 3] = [
    [241.0 / 265.0, 163.0 / 265.0, 64.0 / 265.0],
    [247.0 / 265.0, 247.0 / 265.0, 247.0 / 265.0],
    [153.0 / 265.0, 142.0 / 265.0, 195.0 / 265.0],
];

const PUOR4: [[f64; 3]; 4] = [
    [230.0 / 265.0, 97.0 / 265.0, 1.0 / 265.0],
    [253.0 / 265.0, 184.0 / 265.0, 99.0 / 265.0],
    [178.0 / 265.0, 171.0 / 265.0, 210.0 / 265.0],
    [94.0 / 265.0, 60.0 / 265.0, 153.0 / 265.0],
];

const PUOR5: [[f64; 3]; 5] = [
    [230.0 / 265.0, 97.0 / 265.0, 1.0 / 265.0],
    [253.0 / 265.0, 184.0 / 265.0, 99.0 / 265.0],
    [247.0 / 265.0, 247.0 / 265.0, 247.0 / 265.0],
    [178.0 / 265.0, 171.0 / 265.0, 210.0 / 265.0],
    [94.0 / 265.0, 60.0 / 265.0, 153.0 / 265.0],
];

const PUOR6: [[f64; 3]; 6] = [
    [179.0 / 265.0, 88.0 / 265.0, 6.0 / 265.0],
    [241.0 / 265.0, 163.0 / 265.0, 64.0 / 265.0],
    [254.0 / 265.0, 224.0 / 265.0, 182.0 / 265.0],
    [216.0 / 265.0, 218.0 / 265.0, 235.0 / 265.0],
    [153.0 / 265.0, 142.0 / 265.0, 195.0 / 265.0],
    [84.0 / 265.0, 39.0 / 265.0, 136.0 / 265.0],
];

const PUOR7: [[f64; 3]; 7] = [
    [179.0 / 265.0, 88.0 / 265.0, 6.0 / 265.0],
    [241.0 / 265.0, 163.0 / 265.0, 64.0 / 265.0],
    [254.0 / 265.0, 224.0 / 265.0, 182.0 / 265.0],
    [247.0 / 265.0, 247.0 / 265.0, 247.0 / 265.0],
    [216.0 / 265.0, 218.0 / 265.0, 235.0 / 265.0],
    [153.0 / 265.0, 142.0 / 265.0, 195.0 / 265.0],
    [84.0 / 265.0, 39.0 / 265.0, 136.0 / 265.0],
];

const PUOR8: [[f64; 3]; 8] = [
    [179.0 / 265.0, 88.0 / 265.0, 6.0 / 265.0],
    [224.0 / 265.0, 130.0 / 265.0, 20.0 / 265.0],
    [253.0 / 265.0, 184.0 / 265.0, 99.0 / 265.0],
    [254.0 / 265.0, 224.0 / 265.0, 182.0 / 265.0],
    [216.0 / 265.0, 218.0 / 265.0, 235.0 / 265.0],
    [178.0 / 265.0, 171.0 / 265.0, 210.0 / 265.0],
    [128.0 / 265.0, 115.0 / 265.0, 172.0 / 265.0],
    [84.0 / 265.0, 39.0 / 265.0, 136.0 / 265.0],
];

const PUOR9: [[f64; 3]; 9] = [
    [179.0 / 265.0, 88.0 / 265.0, 6.0 / 265.0],
    [224.0 / 265.0, 130.0 / 265.0, 20.0 / 265.0],
    [253.0 / 265.0, 184.0 / 265.0, 99.0 / 265.0],
    [254.0 / 265.0, 224.0 / 265.0, 182.0 / 265.0],
    [247.0 / 265.0, 247.0 / 265.0, 247.0 / 265.0],
    [216.0 / 265.0, 218.0 / 265.0, 235.0 / 265.0],
    [178.0 / 265.0, 171.0 / 265.0, 210.0 / 265.0],
    [128.0 / 265.0, 115.0 / 265.0, 172.0 / 265.0],
    [84.0 / 265.0, 39.0 / 265.0, 136.0 / 265.0],
];

const PUOR10: [[f64; 3]; 10] = [
    [127.0 / 265.0, 59.0 / 265.0, 8.0 / 265.0],
    [179.0 / 265.0, 88.0 / 265.0, 6.0 / 265.0],
    [224.0 / 265.0, 130.0 / 265.0, 20.0 / 265.0],
    [253.0 / 265.0, 184.0 / 265.0, 99.0 / 265.0],
    [254.0 / 265.0, 224.0 / 265.0, 182.0 / 265.0],
    [216.0 / 265.0, 218.0 / 265.0, 235.0 / 265.0],
    [178.0 / 265.0, 171.0 / 265.0, 210.0 / 265.0],
    [128.0 / 265.0, 115.0 / 265.0, 172.0 / 265.0],
    [84.0 / 265.0, 39.0 / 265.0, 136.0 / 265.0],
    [45.0 / 265.0, 0.0 / 265.0, 75.0 / 265.0],
];

const PUOR11: [[f64; 3]; 11] = [
    [127.0 / 265.0, 59.0 / 265.0, 8.0 / 265.0],
    [179.0 / 265.0, 88.0 / 265.0, 6.0 / 265.0],
    [224.0 / 265.0, 130.0 / 265.0, 20.0 / 265.0],
    [253.0 / 265.0, 184.0 / 265.0, 99.0 / 265.0],
    [254.0 / 265.0, 224.0 / 265.0, 182.0 / 265.0],
    [247.0 / 265.0, 247.0 / 265.0, 247.0 / 265.0],
    [216.0 / 265.0, 218.0 / 265.0, 235.0 / 265.0],
    [178.0 / 265.0, 171.0 / 265.0, 210.0 / 265.0],
    [128.0 / 265.0, 115.0 / 265.0, 172.0 / 265.0],
    [84.0 / 265.0, 39.0 / 265.0, 136.0 / 265.0],
    [45.0 / 265.0, 0.0 / 265.0, 75.0 / 265.0],
];

const PURD3: [[f64; 3]; 3] = [
    [231.0 / 265.0, 225.0 / 265.0, 239.0 / 265.0],
    [201.0 / 265.0, 148.0 / 265.0, 199.0 / 265.0],
    [221.0 / 265.0, 28.0 / 265.0, 119.0 / 265.0],
];

const PURD4: [[f64; 3]; 4] = [
    [241.0 / 265.0, 238.0 / 265.0, 246.0 / 265.0],
    [215.0 / 265.0, 181.0 / 265.0, 216.0 / 265.0],
    [223.0 / 265.0, 101.0 / 265.0, 176.0 / 265.0],
    [206.0 / 265.0, 18.0 / 265.0, 86.0 / 265.0],
];

const PURD5: [[f64; 3]; 5] = [
    [241.0 / 265.0, 238.0 / 265.0, 246.0 / 265.0],
    [215.0 / 265.0, 181.0 / 265.0, 216.0 / 265.0],
    [223.0 / 265.0, 101.0 / 265.0, 176.0 / 265.0],
    [221.0 / 265.0, 28.0 / 265.0, 119.0 / 265.0],
    [152.0 / 265.0, 0.0 / 265.0, 67.0 / 265.0],
];

const PURD6: [[f64; 3]; 6] = [
    [241.0 / 265.0, 238.0 / 265.0, 246.0 / 265.0],
    [212.0 / 265.0, 185.0 / 265.0, 218.0 / 265.0],
    [201.0 / 265.0, 148.0 / 265.0, 199.0 / 265.0],
    [223.0 / 265.0, 101.0 / 265.0, 176.0 / 265.0],
    [221.0 / 265.0, 28.0 / 265.0, 119.0 / 265.0],
    [152.0 / 265.0, 0.0 / 265.0, 67.0 / 265.0],
];

const PURD7: [[f64; 3]; 7] = [
    [241.0 / 265.0, 238.0 / 265.0, 246.0 / 265.0],
    [212.0 / 265.0, 185.0 / 265.0, 218.0 / 265.0],
    [201.0 / 265.0, 148.0 / 265.0, 199.0 / 265.0],
    [223.0 / 265.0, 101.0 / 265.0, 176.0 / 265.0],
    [231.0 / 265.0, 41.0 / 265.0, 138.0 / 265.0],
    [206.0 / 265.0, 18.0 / 265.0, 86.0 / 265.0],
    [145.0 / 265.0, 0.0 / 265.0, 63.0 / 265.0],
];

const PURD8: [[f64; 3]; 8] = [
    [247.0 / 265.0, 244.0 / 265.0, 249.0 / 265.0],
    [231.0 / 265.0, 225.0 / 265.0, 239.0 / 265.0],
    [212.0 / 265.0, 185.0 / 265.0, 218.0 / 265.0],
    [201.0 / 265.0, 148.0 / 265.0, 199.0 / 265.0],
    [223.0 / 265.0, 101.0 / 265.0, 176.0 / 265.0],
    [231.0 / 265.0, 41.0 / 265.0, 138.0 / 265.0],
    [206.0 / 265.0, 18.0 / 265.0, 86.0 / 265.0],
    [145.0 / 265.0, 0.0 / 265.0, 63.0 / 265.0],
];

const PURD9: [[f64; 3]; 9] = [
    [247.0 / 265.0, 244.0 / 265.0, 249.0 / 265.0],
    [231.0 / 265.0, 225.0 / 265.0, 239.0 / 265.0],
    [212.0 / 265.0, 185.0 / 265.0, 218.0 / 265.0],
    [201.0 / 265.0, 148.0 / 265.0, 199.0 / 265.0],
    [223.0 / 265.0, 101.0 / 265.0, 176.0 / 265.0],
    [231.0 / 265.0, 41.0 / 265.0, 138.0 / 265.0],
    [206.0 / 265.0, 18.0 / 265.0, 86.0 / 265.0],
    [152.0 / 265.0, 0.0 / 265.0, 67.0 / 265.0],
    [103.0 / 265.0, 0.0 / 265.0, 31.0 / 265.0],
];

const PURPLES3: [[f64; 3]; 3] = [
    [239.0 / 265.0, 237.0 / 265.0, 245.0 / 265.0],
    [188.0 / 265.0, 189.0 / 265.0, 220.0 / 265.0],
    [117.0 / 265.0, 107.0 / 265.0, 177.0 / 265.0],
];

const PURPLES4: [[f64; 3]; 4] = [
    [242.0 / 265.0, 240.0 / 265.0, 247.0 / 265.0],
    [203.0 / 265.0, 201.0 / 265.0, 226.0 / 265.0],
    [158.0 / 265.0, 154.0 / 265.0, 200.0 / 265.0],
    [106.0 / 265.0, 81.0 / 265.0, 163.0 / 265.0],
];

const PURPLES5: [[f64; 3]; 5] = [
    [242.0 / 265.0, 240.0 / 265.0, 247.0 / 265.0],
    [203.0 / 265.0, 201.0 / 265.0, 226.0 / 265.0],
    [158.0 / 265.0, 154.0 / 265.0, 200.0 / 265.0],
    [117.0 / 265.0, 107.0 / 265.0, 177.0 / 265.0],
    [84.0 / 265.0, 39.0 / 265.0, 143.0 / 265.0],
];

const PURPLES6: [[f64; 3]; 6] = [
    [242.0 / 265.0, 240.0 / 265.0, 247.0 / 265.0],
    [218.0 / 265.0, 218.0 / 265.0, 235.0 / 265.0],
    [188.0 / 265.0, 189.0 / 265.0, 220.0 / 265.0],
    [158.0 / 265.0, 154.0 / 265.0, 200.0 / 265.0],
    [117.0 / 265.0, 107.0 / 265.0, 177.0 / 265.0],
    [84.0 / 265.0, 39.0 / 265.0, 143.0 / 265.0],
];

const PURPLES7: [[f64; 3]; 7] = [
    [242.0 / 265.0, 240.0 / 265.0, 247.0 / 265.0],
    [218.0 / 265.0, 218.0 / 265.0, 235.0 / 265.0],
    [188.0 / 265.0, 189.0 / 265.0, 220.0 / 265.0],
    [158.0 / 265.0, 154.0 / 265.0, 200.0 / 265.0],
    [128.0 / 265.0, 125.0 / 265.0, 186.0 / 265.0],
    [106.0 / 265.0, 81.0 / 265.0, 163.0 / 265.0],
    [74.0 / 265.0, 20.0 / 265.0, 134.0 / 265.0],
];

const PURPLES8: [[f64; 3]; 8] = [
    [252.0 / 265.0, 251.0 / 265.0, 253.0 / 265.0],
    [239.0 / 265.0, 237.0 / 265.0, 245.0 / 265.0],
    [218.0 / 265.0, 218.0 / 265.0, 235.0 / 265.0],
    [188.0 / 265.0, 189.0 / 265.0, 220.0 / 265.0],
    [158.0 / 265.0, 154.0 / 265.0, 200.0 / 265.0],
    [128.0 / 265.0, 125.0 / 265.0, 186.0 / 265.0],
    [106.0 / 265.0, 81.0 / 265.0, 163.0 / 265.0],
    [74.0 / 265.0, 20.0 / 265.0, 134.0 / 265.0],
];

const PURPLES9: [[f64; 3]; 9] = [
    [252.0 / 265.0, 251.0 / 265.0, 253.0 / 265.0],
    [239.0 / 265.0, 237.0 / 265.0, 245.0 / 265.0],
    [218.0 / 265.0, 218.0 / 265.0, 235.0 / 265.0],
    [188.0 / 265.0, 189.0 / 265.0, 220.0 / 265.0],
    [158.0 / 265.0, 154.0 / 265.0, 200.0 / 265.0],
    [128.0 / 265.0, 125.0 / 265.0, 186.0 / 265.0],
    [106.0 / 265.0, 81.0 / 265.0, 163.0 / 265.0],
    [84.0 / 265.0, 39.0 / 265.0, 143.0 / 265.0],
    [63.0 / 265.0, 0.0 / 265.0, 125.0 / 265.0],
];

const RDBU3: [[f64; 3]; 3] = [
    [239.0 / 265.0, 138.0 / 265.0, 98.0 / 265.0],
    [247.0 / 265.0, 247.0 / 265.0, 247.0 / 265.0],
    [103.0 / 265.0, 169.0 / 265.0, 207.0 / 265.0],
];

const RDBU4: [[f64; 3]; 4] = [
    [202.0 / 265.0, 0.0 / 265.0, 32.0 / 265.0],
    [244.0 / 265.0, 165.0 / 265.0, 130.0 / 265.0],
    [146.0 / 265.0, 197.0 / 265.0, 222.0 / 265.0],
    [5.0 / 265.0, 113.0 / 265.0, 176.0 / 265.0],
];

const RDBU5: [[f64; 3]; 5] = [
    [202.0 / 265.0, 0.0 / 265.0, 32.0 / 265.0],
    [244.0 / 265.0, 165.0 / 265.0, 130.0 / 265.0],
    [247.0 / 265.0, 247.0 / 265.0, 247.0 / 265.0],
    [146.0 / 265.0, 197.0 / 265.0, 222.0 / 265.0],
    [5.0 / 265.0, 113.0 / 265.0, 176.0 / 265.0],
];

const RDBU6: [[f64; 3]; 6] = [
    [178.0 / 265.0, 24.0 / 265.0, 43.0 / 265.0],
    [239.0 / 265.0, 138.0 / 265.0, 98.0 / 265.0],
    [253.0 / 265.0, 219.0 / 265.0, 199.0 / 265.0],
    [209.0 / 265.0, 229.0 / 265.0, 240.0 / 265.0],
    [103.0 / 265.0, 169.0 / 265.0, 207.0 / 265.0],
    [33.0 / 265.0, 102.0 / 265.0, 172.0 / 265.0],
];

const RDBU7: [[f64; 3]; 7] = [
    [178.0 / 265.0, 24.0 / 265.0, 43.0 / 265.0],
    [239.0 / 265.0, 138.0 / 265.0, 98.0 / 265.0],
    [253.0 / 265.0, 219.0 / 265.0, 199.0 / 265.0],
    [247.0 / 265.0, 247.0 / 265.0, 247.0 / 265.0],
    [209.0 / 265.0, 229.0 / 265.0, 240.0 / 265.0],
    [103.0 / 265.0, 169.0 / 265.0, 207.0 / 265.0],
    [33.0 / 265.0, 102.0 / 265.0, 172.0 / 265.0],
];

const RDBU8: [[f64; 3]; 8] = [
    [178.0 / 265.0, 24.0 / 265.0, 43.0 / 265.0],
    [214.0 / 265.0, 96.0 / 265.0, 77.0 / 265.0],
    [244.0 / 265.0, 165.0 / 265.0, 130.0 / 265.0],
    [253.0 / 265.0, 219.0 / 265.0, 199.0 / 265.0],
    [209.0 / 265.0, 229.0 / 265.0, 240.0 / 265.0],
    [146.0 / 265.0, 197.0 / 265.0, 222.0 / 265.0],
    [67.0 / 265.0, 147.0 / 265.0, 195.0 / 265.0],
    [33.0 / 265.0, 102.0 / 265.0, 172.0 / 265.0],
];

const RDBU9: [[f64; 3]; 9] = [
    [178.0 / 265.0, 24.0 / 265.0, 43.0 / 265.0],
    [214.0 / 265.0, 96.0 / 265.0, 77.0 / 265.0],
    [244.0 / 265.0, 165.0 / 265.0, 130.0 / 265.0],
    [253.0 / 265.0, 219.0 / 265.0, 199.0 / 265.0],
    [247.0 / 265.0, 247.0 / 265.0, 247.0 / 265.0],
    [209.0 / 265.0, 229.0 / 265.0, 240.0 / 265.0],
    [146.0 / 265.0, 197.0 / 265.0, 222.0 / 265.0],
    [67.0 / 265.0, 147.0 / 265.0, 195.0 / 265.0],
    [33.0 / 265.0, 102.0 / 265.0, 172.0 / 265.0],
];

const RDBU10: [[f64; 3]; 10] = [
    [103.0 / 265.0, 0.0 / 265.0, 31.0 / 265.0],
    [178.0 / 265.0, 24.0 / 265.0, 43.0 / 265.0],
    [214.0 / 265.0, 96.0 / 265.0, 77.0 / 265.0],
    [244.0 / 265.0, 165.0 / 265.0, 130.0 / 265.0],
    [253.0 / 265.0, 219.0 / 265.0, 199.0 / 265.0],
    [209.0 / 265.0, 229.0 / 265.0, 240.0 / 265.0],
    [146.0 / 265.0, 197.0 / 265.0, 222.0 / 265.0],
    [67.0 / 265.0, 147.0 / 265.0, 195.0 / 265.0],
    [33.0 / 265.0, 102.0 / 265.0, 172.0 / 265.0],
    [5.0 / 265.0, 48.0 / 265.0, 97.0 / 265.0],
];

const RDBU11: [[f64; 3]; 11] = [
    [103.0 / 265.0, 0.0 / 265.0, 31.0 / 265.0],
    [178.0 / 265.0, 24.0 / 265.0, 43.0 / 265.0],
    [214.0 / 265.0, 96.0 / 265.0, 77.0 / 265.0],
    [244.0 / 265.0, 165.0 / 265.0, 130.0 / 265.0],
    [253.0 / 265.0, 219.0 / 265.0, 199.0 / 265.0],
    [247.0 / 265.0, 247.0 / 265.0, 247.0 / 265.0],
    [209.0 / 265.0, 229.0 / 265.0, 240.0 / 265.0],
    [146.0 / 265.0, 197.0 / 265.0, 222.0 / 265.0],
    [67.0 / 265.0, 147.0 / 265.0, 195.0 / 265.0],
    [33.0 / 265.0, 102.0 / 265.0, 172.0 / 265.0],
    [5.0 / 265.0, 48.0 / 265.0, 97.0 / 265.0],
];

const RDGY3: [[f64; 3]; 3] = [
    [239.0 / 265.0, 138.0 / 265.0, 98.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 255.0 / 265.0],
    [153.0 / 265.0, 153.0 / 265.0, 153.0 / 265.0],
];

const RDGY4: [[f64; 3]; 4] = [
    [202.0 / 265.0, 0.0 / 265.0, 32.0 / 265.0],
    [244.0 / 265.0, 165.0 / 265.0, 130.0 / 265.0],
    [186.0 / 265.0, 186.0 / 265.0, 186.0 / 265.0],
    [64.0 / 265.0, 64.0 / 265.0, 64.0 / 265.0],
];

const RDGY5: [[f64; 3]; 5] = [
    [202.0 / 265.0, 0.0 / 265.0, 32.0 / 265.0],
    [244.0 / 265.0, 165.0 / 265.0, 130.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 255.0 / 265.0],
    [186.0 / 265.0, 186.0 / 265.0, 186.0 / 265.0],
    [64.0 / 265.0, 64.0 / 265.0, 64.0 / 265.0],
];

const RDGY6: [[f64; 3]; 6] = [
    [178.0 / 265.0, 24.0 / 265.0, 43.0 / 265.0],
    [239.0 / 265.0, 138.0 / 265.0, 98.0 / 265.0],
    [253.0 / 265.0, 219.0 / 265.0, 199.0 / 265.0],
    [224.0 / 265.0, 224.0 / 265.0, 224.0 / 265.0],
    [153.0 / 265.0, 153.0 / 265.0, 153.0 / 265.0],
    [77.0 / 265.0, 77.0 / 265.0, 77.0 / 265.0],
];

const RDGY7: [[f64; 3]; 7] = [
    [178.0 / 265.0, 24.0 / 265.0, 43.0 / 265.0],
    [239.0 / 265.0, 138.0 / 265.0, 98.0 / 265.0],
    [253.0 / 265.0, 219.0 / 265.0, 199.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 255.0 / 265.0],
    [224.0 / 265.0, 224.0 / 265.0, 224.0 / 265.0],
    [153.0 / 265.0, 153.0 / 265.0, 153.0 / 265.0],
    [77.0 / 265.0, 77.0 / 265.0, 77.0 / 265.0],
];

const RDGY8: [[f64; 3]; 8] = [
    [178.0 / 265.0, 24.0 / 265.0, 43.0 / 265.0],
    [214.0 / 265.0, 96.0 / 265.0, 77.0 / 265.0],
    [244.0 / 265.0, 165.0 / 265.0, 130.0 / 265.0],
    [253.0 / 265.0, 219.0 / 265.0, 199.0 / 265.0],
    [224.0 / 265.0, 224.0 / 265.0, 224.0 / 265.0],
    [186.0 / 265.0, 186.0 / 265.0, 186.0 / 265.0],
    [135.0 / 265.0, 135.0 / 265.0, 135.0 / 265.0],
    [77.0 / 265.0, 77.0 / 265.0, 77.0 / 265.0],
];

const RDGY9: [[f64; 3]; 9] = [
    [178.0 / 265.0, 24.0 / 265.0, 43.0 / 265.0],
    [214.0 / 265.0, 96.0 / 265.0, 77.0 / 265.0],
    [244.0 / 265.0, 165.0 / 265.0, 130.0 / 265.0],
    [253.0 / 265.0, 219.0 / 265.0, 199.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 255.0 / 265.0],
    [224.0 / 265.0, 224.0 / 265.0, 224.0 / 265.0],
    [186.0 / 265.0, 186.0 / 265.0, 186.0 / 265.0],
    [135.0 / 265.0, 135.0 / 265.0, 135.0 / 265.0],
    [77.0 / 265.0, 77.0 / 265.0, 77.0 / 265.0],
];

const RDGY10: [[f64; 3]; 10] = [
    [103.0 / 265.0, 0.0 / 265.0, 31.0 / 265.0],
    [178.0 / 265.0, 24.0 / 265.0, 43.0 / 265.0],
    [214.0 / 265.0, 96.0 / 265.0, 77.0 / 265.0],
    [244.0 / 265.0, 165.0 / 265.0, 130.0 / 265.0],
    [253.0 / 265.0, 219.0 / 265.0, 199.0 / 265.0],
    [224.0 / 265.0, 224.0 / 265.0, 224.0 / 265.0],
    [186.0 / 265.0, 186.0 / 265.0, 186.0 / 265.0],
    [135.0 / 265.0, 135.0 / 265.0, 135.0 / 265.0],
    [77.0 / 265.0, 77.0 / 265.0, 77.0 / 265.0],
    [26.0 / 265.0, 26.0 / 265.0, 26.0 / 265.0],
];

const RDGY11: [[f64; 3]; 11] = [
    [103.0 / 265.0, 0.0 / 265.0, 31.0 / 265.0],
    [178.0 / 265.0, 24.0 / 265.0, 43.0 / 265.0],
    [214.0 / 265.0, 96.0 / 265.0, 77.0 / 265.0],
    [244.0 / 265.0, 165.0 / 265.0, 130.0 / 265.0],
    [253.0 / 265.0, 219.0 / 265.0, 199.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 255.0 / 265.0],
    [224.0 / 265.0, 224.0 / 265.0, 224.0 / 265.0],
    [186.0 / 265.0, 186.0 / 265.0, 186.0 / 265.0],
    [135.0 / 265.0, 135.0 / 265.0, 135.0 / 265.0],
    [77.0 / 265.0, 77.0 / 265.0, 77.0 / 265.0],
    [26.0 / 265.0, 26.0 / 265.0, 26.0 / 265.0],
];

const RDPU3: [[f64; 3]; 3] = [
    [253.0 / 265.0, 224.0 / 265.0, 221.0 / 265.0],
    [250.0 / 265.0, 159.0 / 265.0, 181.0 / 265.0],
    [197.0 / 265.0, 27.0 / 265.0, 138.0 / 265.0],
];

const RDPU4: [[f64; 3]; 4] = [
    [254.0 / 265.0, 235.0 / 265.0, 226.0 / 265.0],
    [251.0 / 265.0, 180.0 / 265.0, 185.0 / 265.0],
    [247.0 / 265.0, 104.0 / 265.0, 161.0 / 265.0],
    [174.0 / 265.0, 1.0 / 265.0, 126.0 / 265.0],
];

const RDPU5: [[f64; 3]; 5] = [
    [254.0 / 265.0, 235.0 / 265.0, 226.0 / 265.0],
    [251.0 / 265.0, 180.0 / 265.0, 185.0 / 265.0],
    [247.0 / 265.0, 104.0 / 265.0, 161.0 / 265.0],
    [197.0 / 265.0, 27.0 / 265.0, 138.0 / 265.0],
    [122.0 / 265.0, 1.0 / 265.0, 119.0 / 265.0],
];

const RDPU6: [[f64; 3]; 6] = [
    [254.0 / 265.0, 235.0 / 265.0, 226.0 / 265.0],
    [252.0 / 265.0, 197.0 / 265.0, 192.0 / 265.0],
    [250.0 / 265.0, 159.0 / 265.0, 181.0 / 265.0],
    [247.0 / 265.0, 104.0 / 265.0, 161.0 / 265.0],
    [197.0 / 265.0, 27.0 / 265.0, 138.0 / 265.0],
    [122.0 / 265.0, 1.0 / 265.0, 119.0 / 265.0],
];

const RDPU7: [[f64; 3]; 7] = [
    [254.0 / 265.0, 235.0 / 265.0, 226.0 / 265.0],
    [252.0 / 265.0, 197.0 / 265.0, 192.0 / 265.0],
    [250.0 / 265.0, 159.0 / 265.0, 181.0 / 265.0],
    [247.0 / 265.0, 104.0 / 265.0, 161.0 / 265.0],
    [221.0 / 265.0, 52.0 / 265.0, 151.0 / 265.0],
    [174.0 / 265.0, 1.0 / 265.0, 126.0 / 265.0],
    [122.0 / 265.0, 1.0 / 265.0, 119.0 / 265.0],
];

const RDPU8: [[f64; 3]; 8] = [
    [255.0 / 265.0, 247.0 / 265.0, 243.0 / 265.0],
    [253.0 / 265.0, 224.0 / 265.0, 221.0 / 265.0],
    [252.0 / 265.0, 197.0 / 265.0, 192.0 / 265.0],
    [250.0 / 265.0, 159.0 / 265.0, 181.0 / 265.0],
    [247.0 / 265.0, 104.0 / 265.0, 161.0 / 265.0],
    [221.0 / 265.0, 52.0 / 265.0, 151.0 / 265.0],
    [174.0 / 265.0, 1.0 / 265.0, 126.0 / 265.0],
    [122.0 / 265.0, 1.0 / 265.0, 119.0 / 265.0],
];

const RDPU9: [[f64; 3]; 9] = [
    [255.0 / 265.0, 247.0 / 265.0, 243.0 / 265.0],
    [253.0 / 265.0, 224.0 / 265.0, 221.0 / 265.0],
    [252.0 / 265.0, 197.0 / 265.0, 192.0 / 265.0],
    [250.0 / 265.0, 159.0 / 265.0, 181.0 / 265.0],
    [247.0 / 265.0, 104.0 / 265.0, 161.0 / 265.0],
    [221.0 / 265.0, 52.0 / 265.0, 151.0 / 265.0],
    [174.0 / 265.0, 1.0 / 265.0, 126.0 / 265.0],
    [122.0 / 265.0, 1.0 / 265.0, 119.0 / 265.0],
    [73.0 / 265.0, 0.0 / 265.0, 106.0 / 265.0],
];

const REDS3: [[f64; 3]; 3] = [
    [254.0 / 265.0, 224.0 / 265.0, 210.0 / 265.0],
    [252.0 / 265.0, 146.0 / 265.0, 114.0 / 265.0],
    [222.0 / 265.0, 45.0 / 265.0, 38.0 / 265.0],
];

const REDS4: [[f64; 3]; 4] = [
    [254.0 / 265.0, 229.0 / 265.0, 217.0 / 265.0],
    [252.0 / 265.0, 174.0 / 265.0, 145.0 / 265.0],
    [251.0 / 265.0, 106.0 / 265.0, 74.0 / 265.0],
    [203.0 / 265.0, 24.0 / 265.0, 29.0 / 265.0],
];

const REDS5: [[f64; 3]; 5] = [
    [254.0 / 265.0, 229.0 / 265.0, 217.0 / 265.0],
    [252.0 / 265.0, 174.0 / 265.0, 145.0 / 265.0],
    [251.0 / 265.0, 106.0 / 265.0, 74.0 / 265.0],
    [222.0 / 265.0, 45.0 / 265.0, 38.0 / 265.0],
    [165.0 / 265.0, 15.0 / 265.0, 21.0 / 265.0],
];

const REDS6: [[f64; 3]; 6] = [
    [254.0 / 265.0, 229.0 / 265.0, 217.0 / 265.0],
    [252.0 / 265.0, 187.0 / 265.0, 161.0 / 265.0],
    [252.0 / 265.0, 146.0 / 265.0, 114.0 / 265.0],
    [251.0 / 265.0, 106.0 / 265.0, 74.0 / 265.0],
    [222.0 / 265.0, 45.0 / 265.0, 38.0 / 265.0],
    [165.0 / 265.0, 15.0 / 265.0, 21.0 / 265.0],
];

const REDS7: [[f64; 3]; 7] = [
    [254.0 / 265.0, 229.0 / 265.0, 217.0 / 265.0],
    [252.0 / 265.0, 187.0 / 265.0, 161.0 / 265.0],
    [252.0 / 265.0, 146.0 / 265.0, 114.0 / 265.0],
    [251.0 / 265.0, 106.0 / 265.0, 74.0 / 265.0],
    [239.0 / 265.0, 59.0 / 265.0, 44.0 / 265.0],
    [203.0 / 265.0, 24.0 / 265.0, 29.0 / 265.0],
    [153.0 / 265.0, 0.0 / 265.0, 13.0 / 265.0],
];

const REDS8: [[f64; 3]; 8] = [
    [255.0 / 265.0, 245.0 / 265.0, 240.0 / 265.0],
    [254.0 / 265.0, 224.0 / 265.0, 210.0 / 265.0],
    [252.0 / 265.0, 187.0 / 265.0, 161.0 / 265.0],
    [252.0 / 265.0, 146.0 / 265.0, 114.0 / 265.0],
    [251.0 / 265.0, 106.0 / 265.0, 74.0 / 265.0],
    [239.0 / 265.0, 59.0 / 265.0, 44.0 / 265.0],
    [203.0 / 265.0, 24.0 / 265.0, 29.0 / 265.0],
    [153.0 / 265.0, 0.0 / 265.0, 13.0 / 265.0],
];

const REDS9: [[f64; 3]; 9] = [
    [255.0 / 265.0, 245.0 / 265.0, 240.0 / 265.0],
    [254.0 / 265.0, 224.0 / 265.0, 210.0 / 265.0],
    [252.0 / 265.0, 187.0 / 265.0, 161.0 / 265.0],
    [252.0 / 265.0, 146.0 / 265.0, 114.0 / 265.0],
    [251.0 / 265.0, 106.0 / 265.0, 74.0 / 265.0],
    [239.0 / 265.0, 59.0 / 265.0, 44.0 / 265.0],
    [203.0 / 265.0, 24.0 / 265.0, 29.0 / 265.0],
    [165.0 / 265.0, 15.0 / 265.0, 21.0 / 265.0],
    [103.0 / 265.0, 0.0 / 265.0, 13.0 / 265.0],
];

const RDYLBU3: [[f64; 3]; 3] = [
    [252.0 / 265.0, 141.0 / 265.0, 89.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 191.0 / 265.0],
    [145.0 / 265.0, 191.0 / 265.0, 219.0 / 265.0],
];

const RDYLBU4: [[f64; 3]; 4] = [
    [215.0 / 265.0, 25.0 / 265.0, 28.0 / 265.0],
    [253.0 / 265.0, 174.0 / 265.0, 97.0 / 265.0],
    [171.0 / 265.0, 217.0 / 265.0, 233.0 / 265.0],
    [44.0 / 265.0, 123.0 / 265.0, 182.0 / 265.0],
];

const RDYLBU5: [[f64; 3]; 5] = [
    [215.0 / 265.0, 25.0 / 265.0, 28.0 / 265.0],
    [253.0 / 265.0, 174.0 / 265.0, 97.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 191.0 / 265.0],
    [171.0 / 265.0, 217.0 / 265.0, 233.0 / 265.0],
    [44.0 / 265.0, 123.0 / 265.0, 182.0 / 265.0],
];

const RDYLBU6: [[f64; 3]; 6] = [
    [215.0 / 265.0, 48.0 / 265.0, 39.0 / 265.0],
    [252.0 / 265.0, 141.0 / 265.0, 89.0 / 265.0],
    [254.0 / 265.0, 224.0 / 265.0, 144.0 / 265.0],
    [224.0 / 265.0, 243.0 / 265.0, 248.0 / 265.0],
    [145.0 / 265.0, 191.0 / 265.0, 219.0 / 265.0],
    [69.0 / 265.0, 117.0 / 265.0, 180.0 / 265.0],
];

const RDYLBU7: [[f64; 3]; 7] = [
    [215.0 / 265.0, 48.0 / 265.0, 39.0 / 265.0],
    [252.0 / 265.0, 141.0 / 265.0, 89.0 / 265.0],
    [254.0 / 265.0, 224.0 / 265.0, 144.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 191.0 / 265.0],
    [224.0 / 265.0, 243.0 / 265.0, 248.0 / 265.0],
    [145.0 / 265.0, 191.0 / 265.0, 219.0 / 265.0],
    [69.0 / 265.0, 117.0 / 265.0, 180.0 / 265.0],
];

const RDYLBU8: [[f64; 3]; 8] = [
    [215.0 / 265.0, 48.0 / 265.0, 39.0 / 265.0],
    [244.0 / 265.0, 109.0 / 265.0, 67.0 / 265.0],
    [253.0 / 265.0, 174.0 / 265.0, 97.0 / 265.0],
    [254.0 / 265.0, 224.0 / 265.0, 144.0 / 265.0],
    [224.0 / 265.0, 243.0 / 265.0, 248.0 / 265.0],
    [171.0 / 265.0, 217.0 / 265.0, 233.0 / 265.0],
    [116.0 / 265.0, 173.0 / 265.0, 209.0 / 265.0],
    [69.0 / 265.0, 117.0 / 265.0, 180.0 / 265.0],
];

const RDYLBU9: [[f64; 3]; 9] = [
    [215.0 / 265.0, 48.0 / 265.0, 39.0 / 265.0],
    [244.0 / 265.0, 109.0 / 265.0, 67.0 / 265.0],
    [253.0 / 265.0, 174.0 / 265.0, 97.0 / 265.0],
    [254.0 / 265.0, 224.0 / 265.0, 144.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 191.0 / 265.0],
    [224.0 / 265.0, 243.0 / 265.0, 248.0 / 265.0],
    [171.0 / 265.0, 217.0 / 265.0, 233.0 / 265.0],
    [116.0 / 265.0, 173.0 / 265.0, 209.0 / 265.0],
    [69.0 / 265.0, 117.0 / 265.0, 180.0 / 265.0],
];

const RDYLBU10: [[f64; 3]; 10] = [
    [165.0 / 265.0, 0.0 / 265.0, 38.0 / 265.0],
    [215.0 / 265.0, 48.0 / 265.0, 39.0 / 265.0],
    [244.0 / 265.0, 109.0 / 265.0, 67.0 / 265.0],
    [253.0 / 265.0, 174.0 / 265.0, 97.0 / 265.0],
    [254.0 / 265.0, 224.0 / 265.0, 144.0 / 265.0],
    [224.0 / 265.0, 243.0 / 265.0, 248.0 / 265.0],
    [171.0 / 265.0, 217.0 / 265.0, 233.0 / 265.0],
    [116.0 / 265.0, 173.0 / 265.0, 209.0 / 265.0],
    [69.0 / 265.0, 117.0 / 265.0, 180.0 / 265.0],
    [49.0 / 265.0, 54.0 / 265.0, 149.0 / 265.0],
];

const RDYLBU11: [[f64; 3]; 11] = [
    [165.0 / 265.0, 0.0 / 265.0, 38.0 / 265.0],
    [215.0 / 265.0, 48.0 / 265.0, 39.0 / 265.0],
    [244.0 / 265.0, 109.0 / 265.0, 67.0 / 265.0],
    [253.0 / 265.0, 174.0 / 265.0, 97.0 / 265.0],
    [254.0 / 265.0, 224.0 / 265.0, 144.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 191.0 / 265.0],
    [224.0 / 265.0, 243.0 / 265.0, 248.0 / 265.0],
    [171.0 / 265.0, 217.0 / 265.0, 233.0 / 265.0],
    [116.0 / 265.0, 173.0 / 265.0, 209.0 / 265.0],
    [69.0 / 265.0, 117.0 / 265.0, 180.0 / 265.0],
    [49.0 / 265.0, 54.0 / 265.0, 149.0 / 265.0],
];

const RDYLGN3: [[f64; 3]; 3] = [
    [252.0 / 265.0, 141.0 / 265.0, 89.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 191.0 / 265.0],
    [145.0 / 265.0, 207.0 / 265.0, 96.0 / 265.0],
];

const RDYLGN4: [[f64; 3]; 4] = [
    [215.0 / 265.0, 25.0 / 265.0, 28.0 / 265.0],
    [253.0 / 265.0, 174.0 / 265.0, 97.0 / 265.0],
    [166.0 / 265.0, 217.0 / 265.0, 106.0 / 265.0],
    [26.0 / 265.0, 150.0 / 265.0, 65.0 / 265.0],
];

const RDYLGN5: [[f64; 3]; 5] = [
    [215.0 / 265.0, 25.0 / 265.0, 28.0 / 265.0],
    [253.0 / 265.0, 174.0 / 265.0, 97.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 191.0 / 265.0],
    [166.0 / 265.0, 217.0 / 265.0, 106.0 / 265.0],
    [26.0 / 265.0, 150.0 / 265.0, 65.0 / 265.0],
];

const RDYLGN6: [[f64; 3]; 6] = [
    [215.0 / 265.0, 48.0 / 265.0, 39.0 / 265.0],
    [252.0 / 265.0, 141.0 / 265.0, 89.0 / 265.0],
    [254.0 / 265.0, 224.0 / 265.0, 139.0 / 265.0],
    [217.0 / 265.0, 239.0 / 265.0, 139.0 / 265.0],
    [145.0 / 265.0, 207.0 / 265.0, 96.0 / 265.0],
    [26.0 / 265.0, 152.0 / 265.0, 80.0 / 265.0],
];

const RDYLGN7: [[f64; 3]; 7] = [
    [215.0 / 265.0, 48.0 / 265.0, 39.0 / 265.0],
    [252.0 / 265.0, 141.0 / 265.0, 89.0 / 265.0],
    [254.0 / 265.0, 224.0 / 265.0, 139.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 191.0 / 265.0],
    [217.0 / 265.0, 239.0 / 265.0, 139.0 / 265.0],
    [145.0 / 265.0, 207.0 / 265.0, 96.0 / 265.0],
    [26.0 / 265.0, 152.0 / 265.0, 80.0 / 265.0],
];

const RDYLGN8: [[f64; 3]; 8] = [
    [215.0 / 265.0, 48.0 / 265.0, 39.0 / 265.0],
    [244.0 / 265.0, 109.0 / 265.0, 67.0 / 265.0],
    [253.0 / 265.0, 174.0 / 265.0, 97.0 / 265.0],
    [254.0 / 265.0, 224.0 / 265.0, 139.0 / 265.0],
    [217.0 / 265.0, 239.0 / 265.0, 139.0 / 265.0],
    [166.0 / 265.0, 217.0 / 265.0, 106.0 / 265.0],
    [102.0 / 265.0, 189.0 / 265.0, 99.0 / 265.0],
    [26.0 / 265.0, 152.0 / 265.0, 80.0 / 265.0],
];

const RDYLGN9: [[f64; 3]; 9] = [
    [215.0 / 265.0, 48.0 / 265.0, 39.0 / 265.0],
    [244.0 / 265.0, 109.0 / 265.0, 67.0 / 265.0],
    [253.0 / 265.0, 174.0 / 265.0, 97.0 / 265.0],
    [254.0 / 265.0, 224.0 / 265.0, 139.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 191.0 / 265.0],
    [217.0 / 265.0, 239.0 / 265.0, 139.0 / 265.0],
    [166.0 / 265.0, 217.0 / 265.0, 106.0 / 265.0],
    [102.0 / 265.0, 189.0 / 265.0, 99.0 / 265.0],
    [26.0 / 265.0, 152.0 / 265.0, 80.0 / 265.0],
];

const RDYLGN10: [[f64; 3]; 10] = [
    [165.0 / 265.0, 0.0 / 265.0, 38.0 / 265.0],
    [215.0 / 265.0, 48.0 / 265.0, 39.0 / 265.0],
    [244.0 / 265.0, 109.0 / 265.0, 67.0 / 265.0],
    [253.0 / 265.0, 174.0 / 265.0, 97.0 / 265.0],
    [254.0 / 265.0, 224.0 / 265.0, 139.0 / 265.0],
    [217.0 / 265.0, 239.0 / 265.0, 139.0 / 265.0],
    [166.0 / 265.0, 217.0 / 265.0, 106.0 / 265.0],
    [102.0 / 265.0, 189.0 / 265.0, 99.0 / 265.0],
    [26.0 / 265.0, 152.0 / 265.0, 80.0 / 265.0],
    [0.0 / 265.0, 104.0 / 265.0, 55.0 / 265.0],
];

const RDYLGN11: [[f64; 3]; 11] = [
    [165.0 / 265.0, 0.0 / 265.0, 38.0 / 265.0],
    [215.0 / 265.0, 48.0 / 265.0, 39.0 / 265.0],
    [244.0 / 265.0, 109.0 / 265.0, 67.0 / 265.0],
    [253.0 / 265.0, 174.0 / 265.0, 97.0 / 265.0],
    [254.0 / 265.0, 224.0 / 265.0, 139.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 191.0 / 265.0],
    [217.0 / 265.0, 239.0 / 265.0, 139.0 / 265.0],
    [166.0 / 265.0, 217.0 / 265.0, 106.0 / 265.0],
    [102.0 / 265.0, 189.0 / 265.0, 99.0 / 265.0],
    [26.0 / 265.0, 152.0 / 265.0, 80.0 / 265.0],
    [0.0 / 265.0, 104.0 / 265.0, 55.0 / 265.0],
];

const SET13: [[f64; 3]; 3] = [
    [228.0 / 265.0, 26.0 / 265.0, 28.0 / 265.0],
    [55.0 / 265.0, 126.0 / 265.0, 184.0 / 265.0],
    [77.0 / 265.0, 175.0 / 265.0, 74.0 / 265.0],
];

const SET14: [[f64; 3]; 4] = [
    [228.0 / 265.0, 26.0 / 265.0, 28.0 / 265.0],
    [55.0 / 265.0, 126.0 / 265.0, 184.0 / 265.0],
    [77.0 / 265.0, 175.0 / 265.0, 74.0 / 265.0],
    [152.0 / 265.0, 78.0 / 265.0, 163.0 / 265.0],
];

const SET15: [[f64; 3]; 5] = [
    [228.0 / 265.0, 26.0 / 265.0, 28.0 / 265.0],
    [55.0 / 265.0, 126.0 / 265.0, 184.0 / 265.0],
    [77.0 / 265.0, 175.0 / 265.0, 74.0 / 265.0],
    [152.0 / 265.0, 78.0 / 265.0, 163.0 / 265.0],
    [255.0 / 265.0, 127.0 / 265.0, 0.0 / 265.0],
];

const SET16: [[f64; 3]; 6] = [
    [228.0 / 265.0, 26.0 / 265.0, 28.0 / 265.0],
    [55.0 / 265.0, 126.0 / 265.0, 184.0 / 265.0],
    [77.0 / 265.0, 175.0 / 265.0, 74.0 / 265.0],
    [152.0 / 265.0, 78.0 / 265.0, 163.0 / 265.0],
    [255.0 / 265.0, 127.0 / 265.0, 0.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 51.0 / 265.0],
];

const SET17: [[f64; 3]; 7] = [
    [228.0 / 265.0, 26.0 / 265.0, 28.0 / 265.0],
    [55.0 / 265.0, 126.0 / 265.0, 184.0 / 265.0],
    [77.0 / 265.0, 175.0 / 265.0, 74.0 / 265.0],
    [152.0 / 265.0, 78.0 / 265.0, 163.0 / 265.0],
    [255.0 / 265.0, 127.0 / 265.0, 0.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 51.0 / 265.0],
    [166.0 / 265.0, 86.0 / 265.0, 40.0 / 265.0],
];

const SET18: [[f64; 3]; 8] = [
    [228.0 / 265.0, 26.0 / 265.0, 28.0 / 265.0],
    [55.0 / 265.0, 126.0 / 265.0, 184.0 / 265.0],
    [77.0 / 265.0, 175.0 / 265.0, 74.0 / 265.0],
    [152.0 / 265.0, 78.0 / 265.0, 163.0 / 265.0],
    [255.0 / 265.0, 127.0 / 265.0, 0.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 51.0 / 265.0],
    [166.0 / 265.0, 86.0 / 265.0, 40.0 / 265.0],
    [247.0 / 265.0, 129.0 / 265.0, 191.0 / 265.0],
];

const SET19: [[f64; 3]; 9] = [
    [228.0 / 265.0, 26.0 / 265.0, 28.0 / 265.0],
    [55.0 / 265.0, 126.0 / 265.0, 184.0 / 265.0],
    [77.0 / 265.0, 175.0 / 265.0, 74.0 / 265.0],
    [152.0 / 265.0, 78.0 / 265.0, 163.0 / 265.0],
    [255.0 / 265.0, 127.0 / 265.0, 0.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 51.0 / 265.0],
    [166.0 / 265.0, 86.0 / 265.0, 40.0 / 265.0],
    [247.0 / 265.0, 129.0 / 265.0, 191.0 / 265.0],
    [153.0 / 265.0, 153.0 / 265.0, 153.0 / 265.0],
];

const SET23: [[f64; 3]; 3] = [
    [102.0 / 265.0, 194.0 / 265.0, 165.0 / 265.0],
    [252.0 / 265.0, 141.0 / 265.0, 98.0 / 265.0],
    [141.0 / 265.0, 160.0 / 265.0, 203.0 / 265.0],
];

const SET24: [[f64; 3]; 4] = [
    [102.0 / 265.0, 194.0 / 265.0, 165.0 / 265.0],
    [252.0 / 265.0, 141.0 / 265.0, 98.0 / 265.0],
    [141.0 / 265.0, 160.0 / 265.0, 203.0 / 265.0],
    [231.0 / 265.0, 138.0 / 265.0, 195.0 / 265.0],
];

const SET25: [[f64; 3]; 5] = [
    [102.0 / 265.0, 194.0 / 265.0, 165.0 / 265.0],
    [252.0 / 265.0, 141.0 / 265.0, 98.0 / 265.0],
    [141.0 / 265.0, 160.0 / 265.0, 203.0 / 265.0],
    [231.0 / 265.0, 138.0 / 265.0, 195.0 / 265.0],
    [166.0 / 265.0, 216.0 / 265.0, 84.0 / 265.0],
];

const SET26: [[f64; 3]; 6] = [
    [102.0 / 265.0, 194.0 / 265.0, 165.0 / 265.0],
    [252.0 / 265.0, 141.0 / 265.0, 98.0 / 265.0],
    [141.0 / 265.0, 160.0 / 265.0, 203.0 / 265.0],
    [231.0 / 265.0, 138.0 / 265.0, 195.0 / 265.0],
    [166.0 / 265.0, 216.0 / 265.0, 84.0 / 265.0],
    [255.0 / 265.0, 217.0 / 265.0, 47.0 / 265.0],
];

const SET27: [[f64; 3]; 7] = [
    [102.0 / 265.0, 194.0 / 265.0, 165.0 / 265.0],
    [252.0 / 265.0, 141.0 / 265.0, 98.0 / 265.0],
    [141.0 / 265.0, 160.0 / 265.0, 203.0 / 265.0],
    [231.0 / 265.0, 138.0 / 265.0, 195.0 / 265.0],
    [166.0 / 265.0, 216.0 / 265.0, 84.0 / 265.0],
    [255.0 / 265.0, 217.0 / 265.0, 47.0 / 265.0],
    [229.0 / 265.0, 196.0 / 265.0, 148.0 / 265.0],
];

const SET28: [[f64; 3]; 8] = [
    [102.0 / 265.0, 194.0 / 265.0, 165.0 / 265.0],
    [252.0 / 265.0, 141.0 / 265.0, 98.0 / 265.0],
    [141.0 / 265.0, 160.0 / 265.0, 203.0 / 265.0],
    [231.0 / 265.0, 138.0 / 265.0, 195.0 / 265.0],
    [166.0 / 265.0, 216.0 / 265.0, 84.0 / 265.0],
    [255.0 / 265.0, 217.0 / 265.0, 47.0 / 265.0],
    [229.0 / 265.0, 196.0 / 265.0, 148.0 / 265.0],
    [179.0 / 265.0, 179.0 / 265.0, 179.0 / 265.0],
];

const SET33: [[f64; 3]; 3] = [
    [141.0 / 265.0, 211.0 / 265.0, 199.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 179.0 / 265.0],
    [190.0 / 265.0, 186.0 / 265.0, 218.0 / 265.0],
];

const SET34: [[f64; 3]; 4] = [
    [141.0 / 265.0, 211.0 / 265.0, 199.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 179.0 / 265.0],
    [190.0 / 265.0, 186.0 / 265.0, 218.0 / 265.0],
    [251.0 / 265.0, 128.0 / 265.0, 114.0 / 265.0],
];

const SET35: [[f64; 3]; 5] = [
    [141.0 / 265.0, 211.0 / 265.0, 199.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 179.0 / 265.0],
    [190.0 / 265.0, 186.0 / 265.0, 218.0 / 265.0],
    [251.0 / 265.0, 128.0 / 265.0, 114.0 / 265.0],
    [128.0 / 265.0, 177.0 / 265.0, 211.0 / 265.0],
];

const SET36: [[f64; 3]; 6] = [
    [141.0 / 265.0, 211.0 / 265.0, 199.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 179.0 / 265.0],
    [190.0 / 265.0, 186.0 / 265.0, 218.0 / 265.0],
    [251.0 / 265.0, 128.0 / 265.0, 114.0 / 265.0],
    [128.0 / 265.0, 177.0 / 265.0, 211.0 / 265.0],
    [253.0 / 265.0, 180.0 / 265.0, 98.0 / 265.0],
];

const SET37: [[f64; 3]; 7] = [
    [141.0 / 265.0, 211.0 / 265.0, 199.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 179.0 / 265.0],
    [190.0 / 265.0, 186.0 / 265.0, 218.0 / 265.0],
    [251.0 / 265.0, 128.0 / 265.0, 114.0 / 265.0],
    [128.0 / 265.0, 177.0 / 265.0, 211.0 / 265.0],
    [253.0 / 265.0, 180.0 / 265.0, 98.0 / 265.0],
    [179.0 / 265.0, 222.0 / 265.0, 105.0 / 265.0],
];

const SET38: [[f64; 3]; 8] = [
    [141.0 / 265.0, 211.0 / 265.0, 199.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 179.0 / 265.0],
    [190.0 / 265.0, 186.0 / 265.0, 218.0 / 265.0],
    [251.0 / 265.0, 128.0 / 265.0, 114.0 / 265.0],
    [128.0 / 265.0, 177.0 / 265.0, 211.0 / 265.0],
    [253.0 / 265.0, 180.0 / 265.0, 98.0 / 265.0],
    [179.0 / 265.0, 222.0 / 265.0, 105.0 / 265.0],
    [252.0 / 265.0, 205.0 / 265.0, 229.0 / 265.0],
];

const SET39: [[f64; 3]; 9] = [
    [141.0 / 265.0, 211.0 / 265.0, 199.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 179.0 / 265.0],
    [190.0 / 265.0, 186.0 / 265.0, 218.0 / 265.0],
    [251.0 / 265.0, 128.0 / 265.0, 114.0 / 265.0],
    [128.0 / 265.0, 177.0 / 265.0, 211.0 / 265.0],
    [253.0 / 265.0, 180.0 / 265.0, 98.0 / 265.0],
    [179.0 / 265.0, 222.0 / 265.0, 105.0 / 265.0],
    [252.0 / 265.0, 205.0 / 265.0, 229.0 / 265.0],
    [217.0 / 265.0, 217.0 / 265.0, 217.0 / 265.0],
];

const SET310: [[f64; 3]; 10] = [
    [141.0 / 265.0, 211.0 / 265.0, 199.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 179.0 / 265.0],
    [190.0 / 265.0, 186.0 / 265.0, 218.0 / 265.0],
    [251.0 / 265.0, 128.0 / 265.0, 114.0 / 265.0],
    [128.0 / 265.0, 177.0 / 265.0, 211.0 / 265.0],
    [253.0 / 265.0, 180.0 / 265.0, 98.0 / 265.0],
    [179.0 / 265.0, 222.0 / 265.0, 105.0 / 265.0],
    [252.0 / 265.0, 205.0 / 265.0, 229.0 / 265.0],
    [217.0 / 265.0, 217.0 / 265.0, 217.0 / 265.0],
    [188.0 / 265.0, 128.0 / 265.0, 189.0 / 265.0],
];

const SET311: [[f64; 3]; 11] = [
    [141.0 / 265.0, 211.0 / 265.0, 199.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 179.0 / 265.0],
    [190.0 / 265.0, 186.0 / 265.0, 218.0 / 265.0],
    [251.0 / 265.0, 128.0 / 265.0, 114.0 / 265.0],
    [128.0 / 265.0, 177.0 / 265.0, 211.0 / 265.0],
    [253.0 / 265.0, 180.0 / 265.0, 98.0 / 265.0],
    [179.0 / 265.0, 222.0 / 265.0, 105.0 / 265.0],
    [252.0 / 265.0, 205.0 / 265.0, 229.0 / 265.0],
    [217.0 / 265.0, 217.0 / 265.0, 217.0 / 265.0],
    [188.0 / 265.0, 128.0 / 265.0, 189.0 / 265.0],
    [204.0 / 265.0, 235.0 / 265.0, 197.0 / 265.0],
];

const SET312: [[f64; 3]; 12] = [
    [141.0 / 265.0, 211.0 / 265.0, 199.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 179.0 / 265.0],
    [190.0 / 265.0, 186.0 / 265.0, 218.0 / 265.0],
    [251.0 / 265.0, 128.0 / 265.0, 114.0 / 265.0],
    [128.0 / 265.0, 177.0 / 265.0, 211.0 / 265.0],
    [253.0 / 265.0, 180.0 / 265.0, 98.0 / 265.0],
    [179.0 / 265.0, 222.0 / 265.0, 105.0 / 265.0],
    [252.0 / 265.0, 205.0 / 265.0, 229.0 / 265.0],
    [217.0 / 265.0, 217.0 / 265.0, 217.0 / 265.0],
    [188.0 / 265.0, 128.0 / 265.0, 189.0 / 265.0],
    [204.0 / 265.0, 235.0 / 265.0, 197.0 / 265.0],
    [255.0 / 265.0, 237.0 / 265.0, 111.0 / 265.0],
];

const SPECTRAL3: [[f64; 3]; 3] = [
    [252.0 / 265.0, 141.0 / 265.0, 89.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 191.0 / 265.0],
    [153.0 / 265.0, 213.0 / 265.0, 148.0 / 265.0],
];

const SPECTRAL4: [[f64; 3]; 4] = [
    [215.0 / 265.0, 25.0 / 265.0, 28.0 / 265.0],
    [253.0 / 265.0, 174.0 / 265.0, 97.0 / 265.0],
    [171.0 / 265.0, 221.0 / 265.0, 164.0 / 265.0],
    [43.0 / 265.0, 131.0 / 265.0, 186.0 / 265.0],
];

const SPECTRAL5: [[f64; 3]; 5] = [
    [215.0 / 265.0, 25.0 / 265.0, 28.0 / 265.0],
    [253.0 / 265.0, 174.0 / 265.0, 97.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 191.0 / 265.0],
    [171.0 / 265.0, 221.0 / 265.0, 164.0 / 265.0],
    [43.0 / 265.0, 131.0 / 265.0, 186.0 / 265.0],
];

const SPECTRAL6: [[f64; 3]; 6] = [
    [213.0 / 265.0, 62.0 / 265.0, 79.0 / 265.0],
    [252.0 / 265.0, 141.0 / 265.0, 89.0 / 265.0],
    [254.0 / 265.0, 224.0 / 265.0, 139.0 / 265.0],
    [230.0 / 265.0, 245.0 / 265.0, 152.0 / 265.0],
    [153.0 / 265.0, 213.0 / 265.0, 148.0 / 265.0],
    [50.0 / 265.0, 136.0 / 265.0, 189.0 / 265.0],
];

const SPECTRAL7: [[f64; 3]; 7] = [
    [213.0 / 265.0, 62.0 / 265.0, 79.0 / 265.0],
    [252.0 / 265.0, 141.0 / 265.0, 89.0 / 265.0],
    [254.0 / 265.0, 224.0 / 265.0, 139.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 191.0 / 265.0],
    [230.0 / 265.0, 245.0 / 265.0, 152.0 / 265.0],
    [153.0 / 265.0, 213.0 / 265.0, 148.0 / 265.0],
    [50.0 / 265.0, 136.0 / 265.0, 189.0 / 265.0],
];

const SPECTRAL8: [[f64; 3]; 8] = [
    [213.0 / 265.0, 62.0 / 265.0, 79.0 / 265.0],
    [244.0 / 265.0, 109.0 / 265.0, 67.0 / 265.0],
    [253.0 / 265.0, 174.0 / 265.0, 97.0 / 265.0],
    [254.0 / 265.0, 224.0 / 265.0, 139.0 / 265.0],
    [230.0 / 265.0, 245.0 / 265.0, 152.0 / 265.0],
    [171.0 / 265.0, 221.0 / 265.0, 164.0 / 265.0],
    [102.0 / 265.0, 194.0 / 265.0, 165.0 / 265.0],
    [50.0 / 265.0, 136.0 / 265.0, 189.0 / 265.0],
];

const SPECTRAL9: [[f64; 3]; 9] = [
    [213.0 / 265.0, 62.0 / 265.0, 79.0 / 265.0],
    [244.0 / 265.0, 109.0 / 265.0, 67.0 / 265.0],
    [253.0 / 265.0, 174.0 / 265.0, 97.0 / 265.0],
    [254.0 / 265.0, 224.0 / 265.0, 139.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 191.0 / 265.0],
    [230.0 / 265.0, 245.0 / 265.0, 152.0 / 265.0],
    [171.0 / 265.0, 221.0 / 265.0, 164.0 / 265.0],
    [102.0 / 265.0, 194.0 / 265.0, 165.0 / 265.0],
    [50.0 / 265.0, 136.0 / 265.0, 189.0 / 265.0],
];

const SPECTRAL10: [[f64; 3]; 10] = [
    [158.0 / 265.0, 1.0 / 265.0, 66.0 / 265.0],
    [213.0 / 265.0, 62.0 / 265.0, 79.0 / 265.0],
    [244.0 / 265.0, 109.0 / 265.0, 67.0 / 265.0],
    [253.0 / 265.0, 174.0 / 265.0, 97.0 / 265.0],
    [254.0 / 265.0, 224.0 / 265.0, 139.0 / 265.0],
    [230.0 / 265.0, 245.0 / 265.0, 152.0 / 265.0],
    [171.0 / 265.0, 221.0 / 265.0, 164.0 / 265.0],
    [102.0 / 265.0, 194.0 / 265.0, 165.0 / 265.0],
    [50.0 / 265.0, 136.0 / 265.0, 189.0 / 265.0],
    [94.0 / 265.0, 79.0 / 265.0, 162.0 / 265.0],
];

const SPECTRAL11: [[f64; 3]; 11] = [
    [158.0 / 265.0, 1.0 / 265.0, 66.0 / 265.0],
    [213.0 / 265.0, 62.0 / 265.0, 79.0 / 265.0],
    [244.0 / 265.0, 109.0 / 265.0, 67.0 / 265.0],
    [253.0 / 265.0, 174.0 / 265.0, 97.0 / 265.0],
    [254.0 / 265.0, 224.0 / 265.0, 139.0 / 265.0],
    [255.0 / 265.0, 255.0 / 265.0, 191.0 / 265.0],
    [230.0 / 265.0, 245.0 / 265.0, 152.0 / 265.0],
    [171.0 / 265.0, 221.0 / 265.0, 164.0 / 265.0],
    [102.0 / 265.0, 194.0 / 265.0, 165.0 / 265.0],
    [50.0 / 265.0, 136.0 / 265.0, 189.0 / 265.0],
    [94.0 / 265.0, 79.0 / 265.0, 162.0 / 265.0],
];

const YLGN3: [[f64; 3]; 3] = [
    [247.0 / 265.0, 252.0 / 265.0, 185.0 / 265.0],
    [173.0 / 265.0, 221.0 / 265.0, 142.0 / 265.0],
    [49.0 / 265.0, 163.0 / 265.0, 84.0 / 265.0],
];

const YLGN4: [[f64; 3]; 4] = [
    [255.0 / 265.0, 255.0 / 265.0, 204.0 / 265.0],
    [194.0 / 265.0, 230.0 / 265.0, 153.0 / 265.0],
    [120.0 / 265.0, 198.0 / 265.0, 121.0 / 265.0],
    [35.0 / 265.0, 132.0 / 265.0, 67.0 / 265.0],
];

const YLGN5: [[f64; 3]; 5] = [
    [255.0 / 265.0, 255.0 / 265.0, 204.0 / 265.0],
    [194.0 / 265.0, 230.0 / 265.0, 153.0 / 265.0],
    [120.0 / 265.0, 198.0 / 265.0, 121.0 / 265.0],
    [49.0 / 265.0, 163.0 / 265.0, 84.0 / 265.0],
    [0.0 / 265.0, 104.0 / 265.0, 55.0 / 265.0],
];

const YLGN6: [[f64; 3]; 6] = [
    [255.0 / 265.0, 255.0 / 265.0, 204.0 / 265.0],
    [217.0 / 265.0, 240.0 / 265.0, 163.0 / 265.0],
    [173.0 / 265.0, 221.0 / 265.0, 142.0 / 265.0],
    [120.0 / 265.0, 198.0 / 265.0, 121.0 / 265.0],
    [49.0 / 265.0, 163.0 / 265.0, 84.0 / 265.0],
    [0.0 / 265.0, 104.0 / 265.0, 55.0 / 265.0],
];

const YLGN7: [[f64; 3]; 7] = [
    [255.0 / 265.0, 255.0 / 265.0, 204.0 / 265.0],
    [217.0 / 265.0, 240.0 / 265.0, 163.0 / 265.0],
    [173.0 / 265.0, 221.0 / 265.0, 142.0 / 265.0],
    [120.0 / 265.0, 198.0 / 265.0, 121.0 / 265.0],
    [65.0 / 265.0, 171.0 / 265.0, 93.0 / 265.0],
    [35.0 / 265.0, 132.0 / 265.0, 67.0 / 265.0],
    [0.0 / 265.0, 90.0 / 265.0, 50.0 / 265.0],
];

const YLGN8: [[f64; 3]; 8] = [
    [255.0 / 265.0, 255.0 / 265.0, 229.0 / 265.0],
    [247.0 / 265.0, 252.0 / 265.0, 185.0 / 265.0],
    [217.0 / 265.0, 240.0 / 265.0, 163.0 / 265.0],
    [173.0 / 265.0, 221.0 / 265.0, 142.0 / 265.0],
    [120.0 / 265.0, 198.0 / 265.0, 121.0 / 265.0],
    [65.0 / 265.0, 171.0 / 265.0, 93.0 / 265.0],
    [35.0 / 265.0, 132.0 / 265.0, 67.0 / 265.0],
    [0.0 / 265.0, 90.0 / 265.0, 50.0 / 265.0],
];

const YLGN9: [[f64; 3]; 9] = [
    [255.0 / 265.0, 255.0 / 265.0, 229.0 / 265.0],
    [247.0 / 265.0, 252.0 / 265.0, 185.0 / 265.0],
    [217.0 / 265.0, 240.0 / 265.0, 163.0 / 265.0],
    [173.0 / 265.0, 221.0 / 265.0, 142.0 / 265.0],
    [120.0 / 265.0, 198.0 / 265.0, 121.0 / 265.0],
    [65.0 / 265.0, 171.0 / 265.0, 93.0 / 265.0],
    [35.0 / 265.0, 132.0 / 265.0, 67.0 / 265.0],
    [0.0 / 265.0, 104.0 / 265.0, 55.0 / 265.0],
    [0.0 / 265.0, 69.0 / 265.0, 41.0 / 265.0],
];

const YLGNBU3: [[f64; 3]; 3] = [
    [237.0 / 265.0, 248.0 / 265.0, 177.0 / 265.0],
    [127.0 / 265.0, 205.0 / 265.0, 187.0 / 265.0],
    [44.0 / 265.0, 127.0 / 265.0, 184.0 / 265.0],
];

const YLGNBU4: [[f64; 3]; 4] = [
    [255.0 / 265.0, 255.0 / 265.0, 204.0 / 265.0],
    [161.0 / 265.0, 218.0 / 265.0, 180.0 / 265.0],
    [65.0 / 265.0, 182.0 / 265.0, 196.0 / 265.0],
    [34.0 / 265.0, 94.0 / 265.0, 168.0 / 265.0],
];

const YLGNBU5: [[f64; 3]; 5] = [
    [255.0 / 265.0, 255.0 / 265.0, 204.0 / 265.0],
    [161.0 / 265.0, 218.0 / 265.0, 180.0 / 265.0],
    [65.0 / 265.0, 182.0 / 265.0, 196.0 / 265.0],
    [44.0 / 265.0, 127.0 / 265.0, 184.0 / 265.0],
    [37.0 / 265.0, 52.0 / 265.0, 148.0 / 265.0],
];

const YLGNBU6: [[f64; 3]; 6] = [
    [255.0 / 265.0, 255.0 / 265.0, 204.0 / 265.0],
    [199.0 / 265.0, 233.0 / 265.0, 180.0 / 265.0],
    [127.0 / 265.0, 205.0 / 265.0, 187.0 / 265.0],
    [65.0 / 265.0, 182.0 / 265.0, 196.0 / 265.0],
    [44.0 / 265.0, 127.0 / 265.0, 184.0 / 265.0],
    [37.0 / 265.0, 52.0 / 265.0, 148.0 / 265.0],
];

const YLGNBU7: [[f64; 3]; 7] = [
    [255.0 / 265.0, 255.0 / 265.0, 204.0 / 265.0],
    [199.0 / 265.0, 233.0 / 265.0, 180.0 / 265.0],
    [127.0 / 265.0, 205.0 / 265.0, 187.0 / 265.0],
    [65.0 / 265.0, 182.0 / 265.0, 196.0 / 265.0],
    [29.0 / 265.0, 145.0 / 265.0, 192.0 / 265.0],
    [34.0 / 265.0, 94.0 / 265.0, 168.0 / 265.0],
    [12.0 / 265.0, 44.0 / 265.0, 132.0 / 265.0],
];

const YLGNBU8: [[f64; 3]; 8] = [
    [255.0 / 265.0, 255.0 / 265.0, 217.0 / 265.0],
    [237.0 / 265.0, 248.0 / 265.0, 177.0 / 265.0],
    [199.0 / 265.0, 233.0 / 265.0, 180.0 / 265.0],
    [127.0 / 265.0, 205.0 / 265.0, 187.0 / 265.0],
    [65.0 / 265.0, 182.0 / 265.0, 196.0 / 265.0],
    [29.0 / 265.0, 145.0 / 265.0, 192.0 / 265.0],
    [34.0 / 265.0, 94.0 / 265.0, 168.0 / 265.0],
    [12.0 / 265.0, 44.0 / 265.0, 132.0 / 265.0],
];

const YLGNBU9: [[f64; 3]; 9] = [
    [255.0 / 265.0, 255.0 / 265.0, 217.0 / 265.0],
    [237.0 / 265.0, 248.0 / 265.0, 177.0 / 265.0],
    [199.0 / 265.0, 233.0 / 265.0, 180.0 / 265.0],
    [127.0 / 265.0, 205.0 / 265.0, 187.0 / 265.0],
    [65.0 / 265.0, 182.0 / 265.0, 196.0 / 265.0],
    [29.0 / 265.0, 145.0 / 265.0, 192.0 / 265.0],
    [34.0 / 265.0, 94.0 / 265.0, 168.0 / 265.0],
    [37.0 / 265.0, 52.0 / 265.0, 148.0 / 265.0],
    [8.0 / 265.0, 29.0 / 265.0, 88.0 / 265.0],
];

const YLORBR3: [[f64; 3]; 3] = [
    [255.0 / 265.0, 247.0 / 265.0, 188.0 / 265.0],
    [254.0 / 265.0, 196.0 / 265.0, 79.0 / 265.0],
    [217.0 / 265.0, 95.0 / 265.0, 14.0 / 265.0],
];

const YLORBR4: [[f64; 3]; 4] = [
    [255.0 / 265.0, 255.0 / 265.0, 212.0 / 265.0],
    [254.0 / 265.0, 217.0 / 265.0, 142.0 / 265.0],
    [254.0 / 265.0, 153.0 / 265.0, 41.0 / 265.0],
    [204.0 / 265.0, 76.0 / 265.0, 2.0 / 265.0],
];

const YLORBR5: [[f64; 3]; 5] = [
    [255.0 / 265.0, 255.0 / 265.0, 212.0 / 265.0],
    [254.0 / 265.0, 217.0 / 265.0, 142.0 / 265.0],
    [254.0 / 265.0, 153.0 / 265.0, 41.0 / 265.0],
    [217.0 / 265.0, 95.0 / 265.0, 14.0 / 265.0],
    [153.0 / 265.0, 52.0 / 265.0, 4.0 / 265.0],
];

const YLORBR6: [[f64; 3]; 6] = [
    [255.0 / 265.0, 255.0 / 265.0, 212.0 / 265.0],
    [254.0 / 265.0, 227.0 / 265.0, 145.0 / 265.0],
    [254.0 / 265.0, 196.0 / 265.0, 79.0 / 265.0],
    [254.0 / 265.0, 153.0 / 265.0, 41.0 / 265.0],
    [217.0 / 265.0, 95.0 / 265.0, 14.0 / 265.0],
    [153.0 / 265.0, 52.0 / 265.0, 4.0 / 265.0],
];

const YLORBR7: [[f64; 3]; 7] = [
    [255.0 / 265.0, 255.0 / 265.0, 212.0 / 265.0],
    [254.0 / 265.0, 227.0 / 265.0, 145.0 / 265.0],
    [254.0 / 265.0, 196.0 / 265.0, 79.0 / 265.0],
    [254.0 / 265.0, 153.0 / 265.0, 41.0 / 265.0],
    [236.0 / 265.0, 112.0 / 265.0, 20.0 / 265.0],
    [204.0 / 265.0, 76.0 / 265.0, 2.0 / 265.0],
    [140.0 / 265.0, 45.0 / 265.0, 4.0 / 265.0],
];

const YLORBR8: [[f64; 3]; 8] = [
    [255.0 / 265.0, 255.0 / 265.0, 229.0 / 265.0],
    [255.0 / 265.0, 247.0 / 265.0, 188.0 / 265.0],
    [254.0 / 265.0, 227.0 / 265.0, 145.0 / 265.0],
    [254.0 / 265.0, 196.0 / 265.0, 79.0 / 265.0],
    [254.0 / 265.0, 153.0 / 265.0, 41.0 / 265.0],
    [236.0 / 265.0, 112.0 / 265.0, 20.0 / 265.0],
    [204.0 / 265.0, 76.0 / 265.0, 2.0 / 265.0],
    [140.0 / 265.0, 45.0 / 265.0, 4.0 / 265.0],
];

const YLORBR9: [[f64; 3]; 9] = [
    [255.0 / 265.0, 255.0 / 265.0, 229.0 / 265.0],
    [255.0 / 265.0, 247.0 / 265.0, 188.0 / 265.0],
    [254.0 / 265.0, 227.0 / 265.0, 145.0 / 265.0],
    [254.0 / 265.0, 196.0 / 265.0, 79.0 / 265.0],
    [254.0 / 265.0, 153.0 / 265.0, 41.0 / 265.0],
    [236.0 / 265.0, 112.0 / 265.0, 20.0 / 265.0],
    [204.0 / 265.0, 76.0 / 265.0, 2.0 / 265.0],
    [153.0 / 265.0, 52.0 / 265.0, 4.0 / 265.0],
    [102.0 / 265.0, 37.0 / 265.0, 6.0 / 265.0],
];

const YLORRD3: [[f64; 3]; 3] = [
    [255.0 / 265.0, 237.0 / 265.0, 160.0 / 265.0],
    [254.0 / 265.0, 178.0 / 265.0, 76.0 / 265.0],
    [240.0 / 265.0, 59.0 / 265.0, 32.0 / 265.0],
];

const YLORRD4: [[f64; 3]; 4] = [
    [255.0 / 265.0, 255.0 / 265.0, 178.0 / 265.0],
    [254.0 / 265.0, 204.0 / 265.0, 92.0 / 265.0],
    [253.0 / 265.0, 141.0 / 265.0, 60.0 / 265.0],
    [227.0 / 265.0, 26.0 / 265.0, 28.0 / 265.0],
];

const YLORRD5: [[f64; 3]; 5] = [
    [255.0 / 265.0, 255.0 / 265.0, 178.0 / 265.0],
    [254.0 / 265.0, 204.0 / 265.0, 92.0 / 265.0],
    [253.0 / 265.0, 141.0 / 265.0, 60.0 / 265.0],
    [240.0 / 265.0, 59.0 / 265.0, 32.0 / 265.0],
    [189.0 / 265.0, 0.0 / 265.0, 38.0 / 265.0],
];

const YLORRD6: [[f64; 3]; 6] = [
    [255.0 / 265.0, 255.0 / 265.0, 178.0 / 265.0],
    [254.0 / 265.0, 217.0 / 265.0, 118.0 / 265.0],
    [254.0 / 265.0, 178.0 / 265.0, 76.0 / 265.0],
    [253.0 / 265.0, 141.0 / 265.0, 60.0 / 265.0],
    [240.0 / 265.0, 59.0 / 265.0, 32.0 / 265.0],
    [189.0 / 265.0, 0.0 / 265.0, 38.0 / 265.0],
];

const YLORRD7: [[f64; 3]; 7] = [
    [255.0 / 265.0, 255.0 / 265.0, 178.0 / 265.0],
    [254.0 / 265.0, 217.0 / 265.0, 118.0 / 265.0],
    [254.0 / 265.0, 178.0 / 265.0, 76.0 / 265.0],
    [253.0 / 265.0, 141.0 / 265.0, 60.0 / 265.0],
    [252.0 / 265.0, 78.0 / 265.0, 42.0 / 265.0],
    [227.0 / 265.0, 26.0 / 265.0, 28.0 / 265.0],
    [177.0 / 265.0, 0.0 / 265.0, 38.0 / 265.0],
];

const YLORRD8: [[f64; 3]; 8] = [
    [255.0 / 265.0, 255.0 / 265.0, 204.0 / 265.0],
    [255.0 / 265.0, 237.0 / 265.0, 160.0 / 265.0],
    [254.0 / 265.0, 217.0 / 265.0, 118.0 / 265.0],
    [254.0 / 265.0, 178.0 / 265.0, 76.0 / 265.0],
    [253.0 / 265.0, 141.0 / 265.0, 60.0 / 265.0],
    [252.0 / 265.0, 78.0 / 265.0, 42.0 / 265.0],
    [227.0 / 265.0, 26.0 / 265.0, 28.0 / 265.0],
    [177.0 / 265.0, 0.0 / 265.0, 38.0 / 265.0],
];

pub(crate) static BREWER: &[BrewerEntry] = &[
    BrewerEntry {
        name: "Accent3",
        typ: MapType::Qualitative,
        palette: &ACCENT3,
    },
    BrewerEntry {
        name: "Accent4",
        typ: MapType::Qualitative,
        palette: &ACCENT4,
    },
    BrewerEntry {
        name: "Accent5",
        typ: MapType::Qualitative,
        palette: &ACCENT5,
    },
    BrewerEntry {
        name: "Accent6",
        typ: MapType::Qualitative,
        palette: &ACCENT6,
    },
    BrewerEntry {
        name: "Accent7",
        typ: MapType::Qualitative,
        palette: &ACCENT7,
    },
    BrewerEntry {
        name: "Accent8",
        typ: MapType::Qualitative,
        palette: &ACCENT8,
    },
    BrewerEntry {
        name: "Blues3",
        typ: MapType::Sequential,
        palette: &BLUES3,
    },
    BrewerEntry {
        name: "Blues4",
        typ: MapType::Sequential,
        palette: &BLUES4,
    },
    BrewerEntry {
        name: "Blues5",
        typ: MapType::Sequential,
        palette: &BLUES5,
    },
    BrewerEntry {
        name: "Blues6",
        typ: MapType::Sequential,
        palette: &BLUES6,
    },
    BrewerEntry {
        name: "Blues7",
        typ: MapType::Sequential,
        palette: &BLUES7,
    },
    BrewerEntry {
        name: "Blues8",
        typ: MapType::Sequential,
        palette: &BLUES8,
    },
    BrewerEntry {
        name: "Blues9",
        typ: MapType::Sequential,
        palette: &BLUES9,
    },
    BrewerEntry {
        name: "BrBG3",
        typ: MapType::Diverging,
        palette: &BRBG3,
    },
    BrewerEntry {
        name: "BrBG4",
        typ: MapType::Diverging,
        palette: &BRBG4,
    },
    BrewerEntry {
        name: "BrBG5",
        typ: MapType::Diverging,
        palette: &BRBG5,
    },
    BrewerEntry {
        name: "BrBG6",
        typ: MapType::Diverging,
        palette: &BRBG6,
    },
    BrewerEntry {
        name: "BrBG7",
        typ: MapType::Diverging,
        palette: &BRBG7,
    },
    BrewerEntry {
        name: "BrBG8",
        typ: MapType::Diverging,
        palette: &BRBG8,
    },
    BrewerEntry {
        name: "BrBG9",
        typ: MapType::Diverging,
        palette: &BRBG9,
    },
    BrewerEntry {
        name: "BrBG10",
        typ: MapType::Diverging,
        palette: &BRBG10,
    },
    BrewerEntry {
        name: "BrBG11",
        typ: MapType::Diverging,
        palette: &BRBG11,
    },
    BrewerEntry {
        name: "BuGn3",
        typ: MapType::Sequential,
        palette: &BUGN3,
    },
    BrewerEntry {
        name: "BuGn4",
        typ: MapType::Sequential,
        palette: &BUGN4,
    },
    BrewerEntry {
        name: "BuGn5",
        typ: MapType::Sequential,
        palette: &BUGN5,
    },
    BrewerEntry {
        name: "BuGn6",
        typ: MapType::Sequential,
        palette: &BUGN6,
    },
    BrewerEntry {
        name: "BuGn7",
        typ: MapType::Sequential,
        palette: &BUGN7,
    },
    BrewerEntry {
        name: "BuGn8",
        typ: MapType::Sequential,
        palette: &BUGN8,
    },
    BrewerEntry {
        name: "BuGn9",
        typ: MapType::Sequential,
        palette: &BUGN9,
    },
    BrewerEntry {
        name: "BuPu3",
        typ: MapType::Sequential,
        palette: &BUPU3,
    },
    BrewerEntry {
        name: "BuPu4",
        typ: MapType::Sequential,
        palette: &BUPU4,
    },
    BrewerEntry {
        name: "BuPu5",
        typ: MapType::Sequential,
        palette: &BUPU5,
    },
    BrewerEntry {
        name: "BuPu6",
        typ: MapType::Sequential,
        palette: &BUPU6,
    },
    BrewerEntry {
        name: "BuPu7",
        typ: MapType::Sequential,
        palette: &BUPU7,
    },
    BrewerEntry {
        name: "BuPu8",
        typ: MapType::Sequential,
        palette: &BUPU8,
    },
    BrewerEntry {
        name: "BuPu9",
        typ: MapType::Sequential,
        palette: &BUPU9,
    },
    BrewerEntry {
        name: "Dark23",
        typ: MapType::Qualitative,
        palette: &DARK23,
    },
    BrewerEntry {
        name: "Dark24",
        typ: MapType::Qualitative,
        palette: &DARK24,
    },
    BrewerEntry {
        name: "Dark25",
        typ: MapType::Qualitative,
        palette: &DARK25,
    },
    BrewerEntry {
        name: "Dark26",
        typ: MapType::Qualitative,
        palette: &DARK26,
    },
    BrewerEntry {
        name: "Dark27",
        typ: MapType::Qualitative,
        palette: &DARK27,
    },
    BrewerEntry {
        name: "Dark28",
        typ: MapType::Qualitative,
        palette: &DARK28,
    },
    BrewerEntry {
        name: "GnBu3",
        typ: MapType::Sequential,
        palette: &GNBU3,
    },
    BrewerEntry {
        name: "GnBu4",
        typ: MapType::Sequential,
        palette: &GNBU4,
    },
    BrewerEntry {
        name: "GnBu5",
        typ: MapType::Sequential,
        palette: &GNBU5,
    },
    BrewerEntry {
        name: "GnBu6",
        typ: MapType::Sequential,
        palette: &GNBU6,
    },
    BrewerEntry {
        name: "GnBu7",
        typ: MapType::Sequential,
        palette: &GNBU7,
    },
    BrewerEntry {
        name: "GnBu8",
        typ: MapType::Sequential,
        palette: &GNBU8,
    },
    BrewerEntry {
        name: "GnBu9",
        typ: MapType::Sequential,
        palette: &GNBU9,
    },
    BrewerEntry {
        name: "Greens3",
        typ: MapType::Sequential,
        palette: &GREENS3,
    },
    BrewerEntry {
        name: "Greens4",
        typ: MapType::Sequential,
        palette: &GREENS4,
    },
    BrewerEntry {
        name: "Greens5",
        typ: MapType::Sequential,
        palette: &GREENS5,
    },
    BrewerEntry {
        name: "Greens6",
        typ: MapType::Sequential,
        palette: &GREENS6,
    },
    BrewerEntry {
        name: "Greens7",
        typ: MapType::Sequential,
        palette: &GREENS7,
    },
    BrewerEntry {
        name: "Greens8",
        typ: MapType::Sequential,
        palette: &GREENS8,
    },
    BrewerEntry {
        name: "Greens9",
        typ: MapType::Sequential,
        palette: &GREENS9,
    },
    BrewerEntry {
        name: "Greys3",
        typ: MapType::Sequential,
        palette: &GREYS3,
    },
    BrewerEntry {
        name: "Greys4",
        typ: MapType::Sequential,
        palette: &GREYS4,
    },
    BrewerEntry {
        name: "Greys5",
        typ: MapType::Sequential,
        palette: &GREYS5,
    },
    BrewerEntry {
        name: "Greys6",
        typ: MapType::Sequential,
        palette: &GREYS6,
    },
    BrewerEntry {
        name: "Greys7",
        typ: MapType::Sequential,
        palette: &GREYS7,
    },
    BrewerEntry {
        name: "Greys8",
        typ: MapType::Sequential,
        palette: &GREYS8,
    },
    BrewerEntry {
        name: "Greys9",
        typ: MapType::Sequential,
        palette: &GREYS9,
    },
    BrewerEntry {
        name: "Oranges3",
        typ: MapType::Sequential,
        palette: &ORANGES3,
    },
    BrewerEntry {
        name: "Oranges4",
        typ: MapType::Sequential,
        palette: &ORANGES4,
    },
    BrewerEntry {
        name: "Oranges5",
        typ: MapType::Sequential,
        palette: &ORANGES5,
    },
    BrewerEntry {
        name: "Oranges6",
        typ: MapType::Sequential,
        palette: &ORANGES6,
    },
    BrewerEntry {
        name: "Oranges7",
        typ: MapType::Sequential,
        palette: &ORANGES7,
    },
    BrewerEntry {
        name: "Oranges8",
        typ: MapType::Sequential,
        palette: &ORANGES8,
    },
    BrewerEntry {
        name: "Oranges9",
        typ: MapType::Sequential,
        palette: &ORANGES9,
    },
    BrewerEntry {
        name: "OrRd3",
        typ: MapType::Sequential,
        palette: &ORRD3,
    },
    BrewerEntry {
        name: "OrRd4",
        typ: MapType::Sequential,
        palette: &ORRD4,
    },
    BrewerEntry {
        name: "OrRd5",
        typ: MapType::Sequential,
        palette: &ORRD5,
    },
    BrewerEntry {
        name: "OrRd6",
        typ: MapType::Sequential,
        palette: &ORRD6,
    },
    BrewerEntry {
        name: "OrRd7",
        typ: MapType::Sequential,
        palette: &ORRD7,
    },
    BrewerEntry {
        name: "OrRd8",
        typ: MapType::Sequential,
        palette: &ORRD8,
    },
    BrewerEntry {
        name: "OrRd9",
        typ: MapType::Sequential,
        palette: &ORRD9,
    },
    BrewerEntry {
        name: "Paired3",
        typ: MapType::Qualitative,
        palette: &PAIRED3,
    },
    BrewerEntry {
        name: "Paired4",
        typ: MapType::Qualitative,
        palette: &PAIRED4,
    },
    BrewerEntry {
        name: "Paired5",
        typ: MapType::Qualitative,
        palette: &PAIRED5,
    },
    BrewerEntry {
        name: "Paired6",
        typ: MapType::Qualitative,
        palette: &PAIRED6,
    },
    BrewerEntry {
        name: "Paired7",
        typ: MapType::Qualitative,
        palette: &PAIRED7,
    },
    BrewerEntry {
        name: "Paired8",
        typ: MapType::Qualitative,
        palette: &PAIRED8,
    },
    BrewerEntry {
        name: "Paired9",
        typ: MapType::Qualitative,
        palette: &PAIRED9,
    },
    BrewerEntry {
        name: "Paired10",
        typ: MapType::Qualitative,
        palette: &PAIRED10,
    },
    BrewerEntry {
        name: "Paired11",
        typ: MapType::Qualitative,
        palette: &PAIRED11,
    },
    BrewerEntry {
        name: "Paired12",
        typ: MapType::Qualitative,
        palette: &PAIRED12,
    },
    BrewerEntry {
        name: "Pastel13",
        typ: MapType::Qualitative,
        palette: &PASTEL13,
    },
    BrewerEntry {
        name: "Pastel14",
        typ: MapType::Qualitative,
        palette: &PASTEL14,
    },
    BrewerEntry {
        name: "Pastel15",
        typ: MapType::Qualitative,
        palette: &PASTEL15,
    },
    BrewerEntry {
        name: "Pastel16",
        typ: MapType::Qualitative,
        palette: &PASTEL16,
    },
    BrewerEntry {
        name: "Pastel17",
        typ: MapType::Qualitative,
        palette: &PASTEL17,
    },
    BrewerEntry {
        name: "Pastel18",
        typ: MapType::Qualitative,
        palette: &PASTEL18,
    },
    BrewerEntry {
        name: "Pastel19",
        typ: MapType::Qualitative,
        palette: &PASTEL19,
    },
    BrewerEntry {
        name: "Pastel23",
        typ: MapType::Qualitative,
        palette: &PASTEL23,
    },
    BrewerEntry {
        name: "Pastel24",
        typ: MapType::Qualitative,
        palette: &PASTEL24,
    },
    BrewerEntry {
        name: "Pastel25",
        typ: MapType::Qualitative,
        palette: &PASTEL25,
    },
    BrewerEntry {
        name: "Pastel26",
        typ: MapType::Qualitative,
        palette: &PASTEL26,
    },
    BrewerEntry {
        name: "Pastel27",
        typ: MapType::Qualitative,
        palette: &PASTEL27,
    },
    BrewerEntry {
        name: "Pastel28",
        typ: MapType::Qualitative,
        palette: &PASTEL28,
    },
    BrewerEntry {
        name: "PiYG3",
        typ: MapType::Diverging,
        palette: &PIYG3,
    },
    BrewerEntry {
        name: "PiYG4",
        typ: MapType::Diverging,
        palette: &PIYG4,
    },
    BrewerEntry {
        name: "PiYG5",
        typ: MapType::Diverging,
        palette: &PIYG5,
    },
    BrewerEntry {
        name: "PiYG6",
        typ: MapType::Diverging,
        palette: &PIYG6,
    },
    BrewerEntry {
        name: "PiYG7",
        typ: MapType::Diverging,
        palette: &PIYG7,
    },
    BrewerEntry {
        name: "PiYG8",
        typ: MapType::Diverging,
        palette: &PIYG8,
    },
    BrewerEntry {
        name: "PiYG9",
        typ: MapType::Diverging,
        palette: &PIYG9,
    },
    BrewerEntry {
        name: "PiYG10",
        typ: MapType::Diverging,
        palette: &PIYG10,
    },
    BrewerEntry {
        name: "PiYG11",
        typ: MapType::Diverging,
        palette: &PIYG11,
    },
    BrewerEntry {
        name: "PRGn3",
        typ: MapType::Diverging,
        palette: &PRGN3,
    },
    BrewerEntry {
        name: "PRGn4",
        typ: MapType::Diverging,
        palette: &PRGN4,
    },
    BrewerEntry {
        name: "PRGn5",
        typ: MapType::Diverging,
        palette: &PRGN5,
    },
    BrewerEntry {
        name: "PRGn6",
        typ: MapType::Diverging,
        palette: &PRGN6,
    },
    BrewerEntry {
        name: "PRGn7",
        typ: MapType::Diverging,
        palette: &PRGN7,
    },
    BrewerEntry {
        name: "PRGn8",
        typ: MapType::Diverging,
        palette: &PRGN8,
    },
    BrewerEntry {
        name: "PRGn9",
        typ: MapType::Diverging,
        palette: &PRGN9,
    },
    BrewerEntry {
        name: "PRGn10",
        typ: MapType::Diverging,
        palette: &PRGN10,
    },
    BrewerEntry {
        name: "PRGn11",
        typ: MapType::Diverging,
        palette: &PRGN11,
    },
    BrewerEntry {
        name: "PuBu3",
        typ: MapType::Sequential,
        palette: &PUBU3,
    },
    BrewerEntry {
        name: "PuBu4",
        typ: MapType::Sequential,
        palette: &PUBU4,
    },
    BrewerEntry {
        name: "PuBu5",
        typ: MapType::Sequential,
        palette: &PUBU5,
    },
    BrewerEntry {
        name: "PuBu6",
        typ: MapType::Sequential,
        palette: &PUBU6,
    },
    BrewerEntry {
        name: "PuBu7",
        typ: MapType::Sequential,
        palette: &PUBU7,
    },
    BrewerEntry {
        name: "PuBu8",
        typ: MapType::Sequential,
        palette: &PUBU8,
    },
    BrewerEntry {
        name: "PuBu9",
        typ: MapType::Sequential,
        palette: &PUBU9,
    },
    BrewerEntry {
        name: "PuBuGn3",
        typ: MapType::Sequential,
        palette: &PUBUGN3,
    },
    BrewerEntry {
        name: "PuBuGn4",
        typ: MapType::Sequential,
        palette: &PUBUGN4,
    },
    BrewerEntry {
        name: "PuBuGn5",
        typ: MapType::Sequential,
        palette: &PUBUGN5,
    },
    BrewerEntry {
        name: "PuBuGn6",
        typ: MapType::Sequential,
        palette: &PUBUGN6,
    },
    BrewerEntry {
        name: "PuBuGn7",
        typ: MapType::Sequential,
        palette: &PUBUGN7,
    },
    BrewerEntry {
        name: "PuBuGn8",
        typ: MapType::Sequential,
        palette: &PUBUGN8,
    },
    BrewerEntry {
        name: "PuBuGn9",
        typ: MapType::Sequential,
        palette: &PUBUGN9,
    },
    BrewerEntry {
        name: "PuOr3",
        typ: MapType::Diverging,
        palette: &PUOR3,
    },
    BrewerEntry {
        name: "PuOr4",
        typ: MapType::Diverging,
        palette: &PUOR4,
    },
    BrewerEntry {
        name: "PuOr5",
        typ: MapType::Diverging,
        palette: &PUOR5,
    },
    BrewerEntry {
        name: "PuOr6",
        typ: MapType::Diverging,
        palette: &PUOR6,
    },
    BrewerEntry {
        name: "PuOr7",
        typ: MapType::Diverging,
        palette: &PUOR7,
    },
    BrewerEntry {
        name: "PuOr8",
        typ: MapType::Diverging,
        palette: &PUOR8,
    },
    BrewerEntry {
        name: "PuOr9",
        typ: MapType::Diverging,
        palette: &PUOR9,
    },
    BrewerEntry {
        name: "PuOr10",
        typ: MapType::Diverging,
        palette: &PUOR10,
    },
    BrewerEntry {
        name: "PuOr11",
        typ: MapType::Diverging,
        palette: &PUOR11,
    },
    BrewerEntry {
        name: "PuRd3",
        typ: MapType::Sequential,
        palette: &PURD3,
    },
    BrewerEntry {
        name: "PuRd4",
        typ: MapType::Sequential,
        palette: &PURD4,
    },
    BrewerEntry {
        name: "PuRd5",
        typ: MapType::Sequential,
        palette: &PURD5,
    },
    BrewerEntry {
        name: "PuRd6",
        typ: MapType::Sequential,
        palette: &PURD6,
    },
    BrewerEntry {
        name: "PuRd7",
        typ: MapType::Sequential,
        palette: &PURD7,
    },
    BrewerEntry {
        name: "PuRd8",
        typ: MapType::Sequential,
        palette: &PURD8,
    },
    BrewerEntry {
        name: "PuRd9",
        typ: MapType::Sequential,
        palette: &PURD9,
    },
    BrewerEntry {
        name: "Purples3",
        typ: MapType::Sequential,
        palette: &PURPLES3,
    },
    BrewerEntry {
        name: "Purples4",
        typ: MapType::Sequential,
        palette: &PURPLES4,
    },
    BrewerEntry {
        name: "Purples5",
        typ: MapType::Sequential,
        palette: &PURPLES5,
    },
    BrewerEntry {
        name: "Purples6",
        typ: MapType::Sequential,
        palette: &PURPLES6,
    },
    BrewerEntry {
        name: "Purples7",
        typ: MapType::Sequential,
        palette: &PURPLES7,
    },
    BrewerEntry {
        name: "Purples8",
        typ: MapType::Sequential,
        palette: &PURPLES8,
    },
    BrewerEntry {
        name: "Purples9",
        typ: MapType::Sequential,
        palette: &PURPLES9,
    },
    BrewerEntry {
        name: "RdBu3",
        typ: MapType::Diverging,
        palette: &RDBU3,
    },
    BrewerEntry {
        name: "RdBu4",
        typ: MapType::Diverging,
        palette: &RDBU4,
    },
    BrewerEntry {
        name: "RdBu5",
        typ: MapType::Diverging,
        palette: &RDBU5,
    },
    BrewerEntry {
        name: "RdBu6",
        typ: MapType::Diverging,
        palette: &RDBU6,
    },
    BrewerEntry {
        name: "RdBu7",
        typ: MapType::Diverging,
        palette: &RDBU7,
    },
    BrewerEntry {
        name: "RdBu8",
        typ: MapType::Diverging,
        palette: &RDBU8,
    },
    BrewerEntry {
        name: "RdBu9",
        typ: MapType::Diverging,
        palette: &RDBU9,
    },
    BrewerEntry {
        name: "RdBu10",
        typ: MapType::Diverging,
        palette: &RDBU10,
    },
    BrewerEntry {
        name: "RdBu11",
        typ: MapType::Diverging,
        palette: &RDBU11,
    },
    BrewerEntry {
        name: "RdGy3",
        typ: MapType::Diverging,
        palette: &RDGY3,
    },
    BrewerEntry {
        name: "RdGy4",
        typ: MapType::Diverging,
        palette: &RDGY4,
    },
    BrewerEntry {
        name: "RdGy5",
        typ: MapType::Diverging,
        palette: &RDGY5,
    },
    BrewerEntry {
        name: "RdGy6",
        typ: MapType::Diverging,
        palette: &RDGY6,
    },
    BrewerEntry {
        name: "RdGy7",
        typ: MapType::Diverging,
        palette: &RDGY7,
    },
    BrewerEntry {
        name: "RdGy8",
        typ: MapType::Diverging,
        palette: &RDGY8,
    },
    BrewerEntry {
        name: "RdGy9",
        typ: MapType::Diverging,
        palette: &RDGY9,
    },
    BrewerEntry {
        name: "RdGy10",
        typ: MapType::Diverging,
        palette: &RDGY10,
    },
    BrewerEntry {
        name: "RdGy11",
        typ: MapType::Diverging,
        palette: &RDGY11,
    },
    BrewerEntry {
        name: "RdPu3",
        typ: MapType::Sequential,
        palette: &RDPU3,
    },
    BrewerEntry {
        name: "RdPu4",
        typ: MapType::Sequential,
        palette: &RDPU4,
    },
    BrewerEntry {
        name: "RdPu5",
        typ: MapType::Sequential,
        palette: &RDPU5,
    },
    BrewerEntry {
        name: "RdPu6",
        typ: MapType::Sequential,
        palette: &RDPU6,
    },
    BrewerEntry {
        name: "RdPu7",
        typ: MapType::Sequential,
        palette: &RDPU7,
    },
    BrewerEntry {
        name: "RdPu8",
        typ: MapType::Sequential,
        palette: &RDPU8,
    },
    BrewerEntry {
        name: "RdPu9",
        typ: MapType::Sequential,
        palette: &RDPU9,
    },
    BrewerEntry {
        name: "Reds3",
        typ: MapType::Sequential,
        palette: &REDS3,
    },
    BrewerEntry {
        name: "Reds4",
        typ: MapType::Sequential,
        palette: &REDS4,
    },
    BrewerEntry {
        name: "Reds5",
        typ: MapType::Sequential,
        palette: &REDS5,
    },
    BrewerEntry {
        name: "Reds6",
        typ: MapType::Sequential,
        palette: &REDS6,
    },
    BrewerEntry {
        name: "Reds7",
        typ: MapType::Sequential,
        palette: &REDS7,
    },
    BrewerEntry {
        name: "Reds8",
        typ: MapType::Sequential,
        palette: &REDS8,
    },
    BrewerEntry {
        name: "Reds9",
        typ: MapType::Sequential,
        palette: &REDS9,
    },
    BrewerEntry {
        name: "RdYlBu3",
        typ: MapType::Diverging,
        palette: &RDYLBU3,
    },
    BrewerEntry {
        name: "RdYlBu4",
        typ: MapType::Diverging,
        palette: &RDYLBU4,
    },
    BrewerEntry {
        name: "RdYlBu5",
        typ: MapType::Diverging,
        palette: &RDYLBU5,
    },
    BrewerEntry {
        name: "RdYlBu6",
        typ: MapType::Diverging,
        palette: &RDYLBU6,
    },
    BrewerEntry {
        name: "RdYlBu7",
        typ: MapType::Diverging,
        palette: &RDYLBU7,
    },
    BrewerEntry {
        name: "RdYlBu8",
        typ: MapType::Diverging,
        palette: &RDYLBU8,
    },
    BrewerEntry {
        name: "RdYlBu9",
        typ: MapType::Diverging,
        palette: &RDYLBU9,
    },
    BrewerEntry {
        name: "RdYlBu10",
        typ: MapType::Diverging,
        palette: &RDYLBU10,
    },
    BrewerEntry {
        name: "RdYlBu11",
        typ: MapType::Diverging,
        palette: &RDYLBU11,
    },
    BrewerEntry {
        name: "RdYlGn3",
        typ: MapType::Diverging,
        palette: &RDYLGN3,
    },
    BrewerEntry {
        name: "RdYlGn4",
        typ: MapType::Diverging,
        palette: &RDYLGN4,
    },
    BrewerEntry {
        name: "RdYlGn5",
        typ: MapType::Diverging,
        palette: &RDYLGN5,
    },
    BrewerEntry {
        name: "RdYlGn6",
        typ: MapType::Diverging,
        palette: &RDYLGN6,
    },
    BrewerEntry {
        name: "RdYlGn7",
        typ: MapType::Diverging,
        palette: &RDYLGN7,
    },
    BrewerEntry {
        name: "RdYlGn8",
        typ: MapType::Diverging,
        palette: &RDYLGN8,
    },
    BrewerEntry {
        name: "RdYlGn9",
        typ: MapType::Diverging,
        palette: &RDYLGN9,
    },
    BrewerEntry {
        name: "RdYlGn10",
        typ: MapType::Diverging,
        palette: &RDYLGN10,
    },
    BrewerEntry {
        name: "RdYlGn11",
        typ: MapType::Diverging,
        palette: &RDYLGN11,
    },
    BrewerEntry {
        name: "Set13",
        typ: MapType::Qualitative,
        palette: &SET13,
    },
    BrewerEntry {
        name: "Set14",
        typ: MapType::Qualitative,
        palette: &SET14,
    },
    BrewerEntry {
        name: "Set15",
        typ: MapType::Qualitative,
        palette: &SET15,
    },
    BrewerEntry {
        name: "Set16",
        typ: MapType::Qualitative,
        palette: &SET16,
    },
    BrewerEntry {
        name: "Set17",
        typ: MapType::Qualitative,
        palette: &SET17,
    },
    BrewerEntry {
        name: "Set18",
        typ: MapType::Qualitative,
        palette: &SET18,
    },
    BrewerEntry {
        name: "Set19",
        typ: MapType::Qualitative,
        palette: &SET19,
    },
    BrewerEntry {
        name: "Set23",
        typ: MapType::Qualitative,
        palette: &SET23,
    },
    BrewerEntry {
        name: "Set24",
        typ: MapType::Qualitative,
        palette: &SET24,
    },
    BrewerEntry {
        name: "Set25",
        typ: MapType::Qualitative,
        palette: &SET25,
    },
    BrewerEntry {
        name: "Set26",
        typ: MapType::Qualitative,
        palette: &SET26,
    },
    BrewerEntry {
        name: "Set27",
        typ: MapType::Qualitative,
        palette: &SET27,
    },
    BrewerEntry {
        name: "Set28",
        typ: MapType::Qualitative,
        palette: &SET28,
    },
    BrewerEntry {
        name: "Set33",
        typ: MapType::Qualitative,
        palette: &SET33,
    },
    BrewerEntry {
        name: "Set34",
        typ: MapType::Qualitative,
        palette: &SET34,
    },
    BrewerEntry {
        name: "Set35",
        typ: MapType::Qualitative,
        palette: &SET35,
    },
    BrewerEntry {
        name: "Set36",
        typ: MapType::Qualitative,
        palette: &SET36,
    },
    BrewerEntry {
        name: "Set37",
        typ: MapType::Qualitative,
        palette: &SET37,
    },
    BrewerEntry {
        name: "Set38",
        typ: MapType::Qualitative,
        palette: &SET38,
    },
    BrewerEntry {
        name: "Set39",
        typ: MapType::Qualitative,
        palette: &SET39,
    },
    BrewerEntry {
        name: "Set310",
        typ: MapType::Qualitative,
        palette: &SET310,
    },
    BrewerEntry {
        name: "Set311",
        typ: MapType::Qualitative,
        palette: &SET311,
    },
    BrewerEntry {
        name: "Set312",
        typ: MapType::Qualitative,
        palette: &SET312,
    },
    BrewerEntry {
        name: "Spectral3",
        typ: MapType::Diverging,
        palette: &SPECTRAL3,
    },
    BrewerEntry {
        name: "Spectral4",
        typ: MapType::Diverging,
        palette: &SPECTRAL4,
    },
    BrewerEntry {
        name: "Spectral5",
        typ: MapType::Diverging,
        palette: &SPECTRAL5,
    },
    BrewerEntry {
        name: "Spectral6",
        typ: MapType::Diverging,
        palette: &SPECTRAL6,
    },
    BrewerEntry {
        name: "Spectral7",
        typ: MapType::Diverging,
        palette: &SPECTRAL7,
    },
    BrewerEntry {
        name: "Spectral8",
        typ: MapType::Diverging,
        palette: &SPECTRAL8,
    },
    BrewerEntry {
        name: "Spectral9",
        typ: MapType::Diverging,
        palette: &SPECTRAL9,
    },
    BrewerEntry {
        name: "Spectral10",
        typ: MapType::Diverging,
        palette: &SPECTRAL10,
    },
    BrewerEntry {
        name: "Spectral11",
        typ: MapType::Diverging,
        palette: &SPECTRAL11,
    },
    BrewerEntry {
        name: "YlGn3",
        typ: MapType::Sequential,
        palette: &YLGN3,
    },
    BrewerEntry {
        name: "YlGn4",
        typ: MapType::Sequential,
        palette: &YLGN4,
    },
    BrewerEntry {
        name: "YlGn5",
        typ: MapType::Sequential,
        palette: &YLGN5,
    },
    BrewerEntry {
        name: "YlGn6",
        typ: MapType::Sequential,
        palette: &YLGN6,
    },
    BrewerEntry {
        name: "YlGn7",
        typ: MapType::Sequential,
        palette: &YLGN7,
    },
    BrewerEntry {
        name: "YlGn8",
        typ: MapType::Sequential,
        palette: &YLGN8,
    },
    BrewerEntry {
        name: "YlGn9",
        typ: MapType::Sequential,
        palette: &YLGN9,
    },
    BrewerEntry {
        name: "YlGnBu3",
        typ: MapType::Sequential,
        palette: &YLGNBU3,
    },
    BrewerEntry {
        name: "YlGnBu4",
        typ: MapType::Sequential,
        palette: &YLGNBU4,
    },
    BrewerEntry {
        name: "YlGnBu5",
        typ: MapType::Sequential,
        palette: &YLGNBU5,
    },
    BrewerEntry {
        name: "YlGnBu6",
        typ: MapType::Sequential,
        palette: &YLGNBU6,
    },
    BrewerEntry {
        name: "YlGnBu7",
        typ: MapType::Sequential,
        palette: &YLGNBU7,
    },
    BrewerEntry {
        name: "YlGnBu8",
        typ: MapType::Sequential,
        palette: &YLGNBU8,
    },
    BrewerEntry {
        name: "YlGnBu9",
        typ: MapType::Sequential,
        palette: &YLGNBU9,
    },
    BrewerEntry {
        name: "YlOrBr3",
        typ: MapType::Sequential,
        palette: &YLORBR3,
    },
    BrewerEntry {
        name: "YlOrBr4",
        typ: MapType::Sequential,
        palette: &YLORBR4,
    },
    BrewerEntry {
        name: "YlOrBr5",
        typ: MapType::Sequential,
        palette: &YLORBR5,
    },
    BrewerEntry {
        name: "YlOrBr6",
        typ: MapType::Sequential,
        palette: &YLORBR6,
    },
    BrewerEntry {
        name: "YlOrBr7",
        typ: MapType::Sequential,
        palette: &YLORBR7,
    },
    BrewerEntry {
        name: "YlOrBr8",
        typ: MapType::Sequential,
        palette: &YLORBR8,
    },
    BrewerEntry {
        name: "YlOrBr9",
        typ: MapType::Sequential,
        palette: &YLORBR9,
    },
    BrewerEntry {
        name: "YlOrRd3",
        typ: MapType::Sequential,
        palette: &YLORRD3,
    },
    BrewerEntry {
        name: "YlOrRd4",
        typ: MapType::Sequential,
        palette: &YLORRD4,
    },
    BrewerEntry {
        name: "YlOrRd5",
        typ: MapType::Sequential,
        palette: &YLORRD5,
    },
    BrewerEntry {
        name: "YlOrRd6",
        typ: MapType::Sequential,
        palette: &YLORRD6,
    },
    BrewerEntry {
        name: "YlOrRd7",
        typ: MapType::Sequential,
        palette: &YLORRD7,
    },
    BrewerEntry {
        name: "YlOrRd8",
        typ: MapType::Sequential,
        palette: &YLORRD8,
    },
];
