pub static ENCODE_HELP: &str = "Convert an image into a boot logo partition file

The input can be any image format zune-image can decode, it is converted
to 8 bit RGBA before encoding. An existing partition file is re-encoded.

The output defaults to isp_part.bin";

pub static DECODE_HELP: &str = "Decode a boot logo partition file into a preview image

The preview format is picked from the output file extension,
e.g preview.png or preview.ppm";

pub static OPEN_HELP: &str = "Open a file and choose what to do from its contents

Partition files are decoded into a preview image,
any other image is encoded into a partition file";

pub static PROFILES_HELP: &str = "Load extra device profiles from a JSON file

The file holds an array of objects, e.g
[{\"id\": \"my-device\", \"width\": 1280, \"height\": 720}]

Profiles with the same id as a built-in profile replace it";
